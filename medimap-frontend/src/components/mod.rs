mod back_button;
mod filter_bar;
mod map;
mod search_bar;

pub use self::{back_button::*, filter_bar::*, map::*, search_bar::*};
