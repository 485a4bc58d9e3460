mod principal;
mod service;

pub use self::principal::resolve_principal;
pub use self::service::AuthService;
