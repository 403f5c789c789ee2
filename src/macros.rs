//! Macros for declaring transition tables.

/// Build a [`Machine`](crate::machine::Machine) from a list of edges.
///
/// Each line is `from, trigger => to;`. The result is a
/// `Result<Machine<_, _>, FsmError>`, failing on the first duplicate edge.
/// Guards and actions are attached afterwards with the regular methods,
/// which target the last edge of the list.
///
/// # Example
///
/// ```
/// use turnkey::machine;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door { Opened, Closed }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Trigger { Open, Close }
///
/// let mut door = machine! {
///     initial: Door::Closed;
///     Door::Closed, Trigger::Open => Door::Opened;
///     Door::Opened, Trigger::Close => Door::Closed;
/// }
/// .unwrap();
///
/// door.fire(Trigger::Open).unwrap();
/// assert!(door.is_in_state(&Door::Opened));
/// ```
#[macro_export]
macro_rules! machine {
    (
        initial: $initial:expr;
        $( $from:expr, $trigger:expr => $to:expr );* $(;)?
    ) => {{
        let mut machine = $crate::machine::Machine::new($initial);
        let mut configured: ::core::result::Result<(), $crate::machine::FsmError> = Ok(());
        $(
            if configured.is_ok() {
                configured = machine.tr($from, $trigger, $to).map(|_| ());
            }
        )*
        configured.map(|()| machine)
    }};
}
