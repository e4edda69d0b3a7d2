//! Domain entities
//!
//! Wire-shaped models of the external document database plus the post
//! projections served by this API.

pub mod block;
pub mod post;

pub use block::{
    Annotations, Block, BlockPayload, CalloutBlock, CodeBlock, ExternalFile, FileSource,
    HostedFile, Icon, LinkBlock, MediaBlock, RichText, TextBlock, TodoBlock,
};
pub use post::{
    resolve_image_url, resolve_status, resolve_tags, resolve_title, FileProperty, Page,
    PostDetail, PostSummary, Property, PublishedPost, SelectOption,
};
