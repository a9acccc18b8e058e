use super::models::*;
use crate::modules::program::domain::entities::{non_empty, Channel, Episode, Program, Work};
use crate::modules::season::{reference_time, ReferenceDateTime};

/// Maps Annict GraphQL nodes onto domain programs
///
/// Missing or malformed fields fall back to defaults; mapping never fails.
#[derive(Debug, Clone, Default)]
pub struct AnnictMapper;

impl AnnictMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a scheduled program node
    pub fn map_program(&self, node: ProgramNode) -> Program {
        Program::new(
            Self::map_work(node.work),
            Self::map_episode(node.episode),
            Self::map_channel(node.channel),
            Self::parse_start_time(node.started_at.as_deref()),
        )
    }

    /// Map a library entry using its next episode and next program projections
    pub fn map_library_entry(&self, node: LibraryEntryNode) -> Program {
        let (channel, started_at) = match node.next_program {
            Some(next) => (next.channel, next.started_at),
            None => (None, None),
        };

        Program::new(
            Self::map_work(node.work),
            Self::map_episode(node.next_episode),
            Self::map_channel(channel),
            Self::parse_start_time(started_at.as_deref()),
        )
    }

    fn map_work(work: Option<WorkNode>) -> Work {
        let Some(work) = work else {
            return Work::default();
        };

        Work::new(work.title.unwrap_or_default())
            .with_official_site_url(work.official_site_url)
            .with_image_url(Self::pick_image_url(work.image))
    }

    /// Prefer the recommended image, then the Facebook OG image
    fn pick_image_url(image: Option<WorkImageNode>) -> Option<String> {
        let image = image?;
        non_empty(image.recommended_image_url).or_else(|| non_empty(image.facebook_og_image_url))
    }

    fn map_episode(episode: Option<EpisodeNode>) -> Episode {
        match episode {
            Some(ep) => Episode::from_parts(ep.number_text, ep.number, ep.title),
            None => Episode::unknown(),
        }
    }

    fn map_channel(channel: Option<ChannelNode>) -> Channel {
        Channel::new(channel.and_then(|c| c.name).unwrap_or_default())
    }

    fn parse_start_time(started_at: Option<&str>) -> Option<ReferenceDateTime> {
        let raw = started_at.filter(|s| !s.trim().is_empty())?;
        let parsed = reference_time::parse_rfc3339(raw);
        if parsed.is_none() {
            log::debug!("Annict: ignoring unparseable startedAt '{}'", raw);
        }
        parsed
    }
}

/// Order library entries: unset start times first, then latest start first
///
/// The sort is stable, so entries with equal keys keep their response order.
pub fn sort_library_entries(programs: &mut [Program]) {
    programs.sort_by(|a, b| match (&a.start_time, &b.start_time) {
        (None, None) => std::cmp::Ordering::Equal,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (Some(x), Some(y)) => y.cmp(x),
    });
}
