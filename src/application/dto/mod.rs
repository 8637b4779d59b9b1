pub mod catalog;
pub mod comments;
pub mod library;
pub mod pagination;
pub mod serde_time;
pub mod stories;
pub mod sync;

pub use catalog::{AppliedFiltersDto, DurationBoundsDto, StorySearchResult};
pub use comments::{CommentAuthorDto, CommentDto};
pub use library::{BookmarkDto, ReadingProgressDto};
pub use pagination::{PageDto, PaginationDto};
pub use stories::{
    CoverImageDto, NarratorAvatarDto, NarratorDto, NarratorListing, NarratorProfileDto,
    NarratorSummaryDto, SocialLinksDto, StoryAudioDto, StoryDto, StoryMetadataDto,
    VoiceProfileDto,
};
pub use sync::SyncReportDto;
