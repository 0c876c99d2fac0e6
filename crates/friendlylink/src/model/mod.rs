//! Domain model for friendlylink.
//!
//! Validated field types, the volunteer and elderly records, the collections
//! that hold them, and the predicates used to filter the displayed lists.

mod friendly_link;
mod information;
mod manager;
mod pair;
mod person;
pub mod predicates;
pub mod sample;
mod unique_list;

pub use friendly_link::FriendlyLink;
pub use information::{Address, Age, Email, Name, Nric, Phone, RiskLevel, Tag};
pub use manager::Model;
pub use pair::Pair;
pub use person::{Elderly, Person, Volunteer};
pub use unique_list::UniquePersonList;
