pub mod guild;
pub mod webhook;
