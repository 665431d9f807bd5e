pub mod factor;
pub mod location;
pub mod medical;
pub mod reading;
pub mod risk;
pub mod weights;
