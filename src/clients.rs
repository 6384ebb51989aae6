pub(crate) mod youtube;

pub(crate) use youtube::{FetchError, YouTubeClient, YouTubeClientConfig};
