//! Declarative macro for service-group methods
//!
//! Almost every vendor method is a fixed name, a fixed version and a params
//! list built from the caller's arguments. This macro turns one line per
//! method into a forwarding call on the group's dispatcher.

/// Define methods that forward straight to the group's dispatcher
///
/// The enclosing type must have a `dispatcher: Arc<Dispatcher>` field and a
/// `SERVICE` associated constant.
///
/// # Example
/// ```rust,ignore
/// impl System {
///     const SERVICE: Service = Service::System;
///
///     rpc_methods! {
///         /// Get the power status
///         fn power_status() => "getPowerStatus", "1.0", [];
///         /// Turn the display on or off
///         fn set_power_status(on: bool) => "setPowerStatus", "1.0", [json!({ "status": on })];
///     }
/// }
/// ```
macro_rules! rpc_methods {
    (
        $(
            $(#[$meta:meta])*
            fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?)
                => $method:literal, $version:literal, [$($param:expr),* $(,)?];
        )*
    ) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, $($arg: $arg_ty),*) -> $crate::Result<serde_json::Value> {
                self.dispatcher
                    .invoke(Self::SERVICE, $method, vec![$($param),*], $version)
            }
        )*
    };
}
