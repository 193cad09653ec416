//! Dataset models

pub mod destination;

pub use destination::{
    Dataset, Destination, Experience, Hotel, ItineraryItem, TransportOption, Transportation,
};
