pub mod channel_list_repository;

pub use channel_list_repository::ChannelListRepository;
