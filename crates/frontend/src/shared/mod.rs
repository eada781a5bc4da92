pub mod busy;
pub mod config;
pub mod confirm;
pub mod date_utils;
pub mod gateway;
pub mod icons;
pub mod modal_frame;
pub mod notifications;
