//! Data access repositories.

pub mod book;
pub mod book_like;
pub mod cart;
pub mod comment;
pub mod follow;
pub mod notification;
pub mod order;
pub mod review;
pub mod user;
pub mod user_profile;

pub use book::BookRepository;
pub use book_like::BookLikeRepository;
pub use cart::CartRepository;
pub use comment::CommentRepository;
pub use follow::FollowRepository;
pub use notification::NotificationRepository;
pub use order::OrderRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
pub use user_profile::UserProfileRepository;
