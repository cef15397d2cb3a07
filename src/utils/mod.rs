pub mod logging;
pub mod validator;
