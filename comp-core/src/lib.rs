pub mod charts;
pub mod gateway;
pub mod model;
pub mod num;
pub mod store;

pub use gateway::{CalculationGateway, GatewayError};
pub use model::*;
pub use store::{Action, EmployeeField, RunToken, Store};
