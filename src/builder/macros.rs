//! Macros for declaring a machine's topology in one place.

/// Declare a machine from a compact topology listing.
///
/// Expands to a `Result<FiniteStateMachineBuilder, FsmError>`. Add `start`
/// after the transitions to get a machine that is already running.
///
/// # Example
///
/// ```
/// use fsm_builder::machine;
///
/// let mut fsm = machine! {
///     init: "idle",
///     states: ["idle", "running", "done"],
///     transitions: ["idle" => "running", "running" => "done"],
///     start,
/// }?;
///
/// fsm.go("running")?;
/// assert_eq!(fsm.current()?, "running");
/// # Ok::<(), fsm_builder::FsmError>(())
/// ```
#[macro_export]
macro_rules! machine {
    (
        init: $init:expr,
        states: [$($state:expr),* $(,)?],
        transitions: [$($from:expr => $to:expr),* $(,)?],
        start $(,)?
    ) => {
        $crate::machine!(
            init: $init,
            states: [$($state),*],
            transitions: [$($from => $to),*]
        )
        .and_then(|mut fsm| {
            fsm.start()?;
            Ok(fsm)
        })
    };

    (
        init: $init:expr,
        states: [$($state:expr),* $(,)?],
        transitions: [$($from:expr => $to:expr),* $(,)?] $(,)?
    ) => {
        {
            let states: ::std::vec::Vec<$crate::StateSpec> =
                ::std::vec![$($crate::StateSpec::from($state)),*];
            let transitions: ::std::vec::Vec<$crate::TransitionSpec> =
                ::std::vec![$(<$crate::TransitionSpec as ::std::convert::From<_>>::from(($from, $to))),*];
            $crate::FiniteStateMachineBuilder::<$crate::engine::TableEngine>::with_topology(
                $init,
                states,
                transitions,
            )
        }
    };
}
