pub mod gateways;
pub mod geo;
pub mod lifetime;
pub mod search;
pub mod usecases;
pub mod util;

pub use self::{
    gateways::*,
    lifetime::{Lifetime, RequestSequence, RequestTicket},
};
