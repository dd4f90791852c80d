//! Database entities.

pub mod book;
pub mod book_like;
pub mod cart;
pub mod cart_item;
pub mod comment;
pub mod follow;
pub mod notification;
pub mod order;
pub mod order_item;
pub mod review;
pub mod user;
pub mod user_profile;

pub use book::Entity as Book;
pub use book_like::Entity as BookLike;
pub use cart::Entity as Cart;
pub use cart_item::Entity as CartItem;
pub use comment::Entity as Comment;
pub use follow::Entity as Follow;
pub use notification::Entity as Notification;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use review::Entity as Review;
pub use user::Entity as User;
pub use user_profile::Entity as UserProfile;
