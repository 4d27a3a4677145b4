use crate::commands::{CmdResult, PlatformCount};
use crate::error::Result;
use crate::model::{count_by_platform, PLATFORMS};
use crate::store::backend::StorageBackend;
use crate::store::collection::Collection;

/// The platform catalogue with owned counts, followed by any platforms found
/// in the collection that are not in the catalogue.
pub fn run<B: StorageBackend>(collection: &Collection<B>) -> Result<CmdResult> {
    let mut counts = count_by_platform(collection.games());

    let mut groups: Vec<PlatformCount> = PLATFORMS
        .iter()
        .map(|platform| PlatformCount {
            platform: platform.to_string(),
            count: counts.remove(*platform).unwrap_or(0),
            known: true,
        })
        .collect();

    groups.extend(
        counts
            .into_iter()
            .filter(|(platform, _)| !platform.trim().is_empty())
            .map(|(platform, count)| PlatformCount {
                platform,
                count,
                known: false,
            }),
    );

    Ok(CmdResult::default().with_platform_groups(groups))
}
