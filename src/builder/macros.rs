//! Macros for ergonomic configuration construction.

/// Build a [`Configuration`](crate::core::Configuration) from a table literal.
///
/// Expands to a [`ConfigurationBuilder`](crate::builder::ConfigurationBuilder)
/// chain and evaluates to `Result<Configuration, ConfigError>`.
///
/// # Example
///
/// ```
/// use statebook::fsm_config;
///
/// let config = fsm_config! {
///     initial: normal;
///     normal { study => busy },
///     busy { get_tired => sleeping, get_hungry => hungry },
///     hungry { eat => normal },
///     sleeping { get_hungry => hungry, get_up => normal },
/// }
/// .unwrap();
///
/// assert_eq!(config.target("busy", "get_tired"), Some("sleeping"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident;
        $(
            $state:ident {
                $($event:ident => $target:ident),* $(,)?
            }
        ),* $(,)?
    ) => {
        $crate::builder::ConfigurationBuilder::new()
            .initial(stringify!($initial))
            $(
                .state(stringify!($state))
                $(.transition(stringify!($state), stringify!($event), stringify!($target)))*
            )*
            .build()
    };
}
