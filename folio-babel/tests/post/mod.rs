//! Post record tests
//!
//! Public and admin views built from stored records.

mod views;
