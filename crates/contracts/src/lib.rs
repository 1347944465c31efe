//! Shared API contracts between the dashboard frontend and the analytics API.
//!
//! Every payload the frontend consumes is described here as a serde DTO, one
//! module per view. Pure derivations that operate on those payloads (customer
//! segmentation) live next to their DTOs so they can be unit tested on the
//! host without a browser runtime.

pub mod views;
