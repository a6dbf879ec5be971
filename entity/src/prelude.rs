pub use super::favorite::Entity as Favorite;
pub use super::person::Entity as Person;
pub use super::pilot::Entity as Pilot;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
