pub use super::guild::Entity as Guild;
pub use super::webhook::Entity as Webhook;
