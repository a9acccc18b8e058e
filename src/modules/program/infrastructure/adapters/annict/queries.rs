//! Annict GraphQL queries

/// Unwatched programs for the viewer, latest start first
pub const GET_PROGRAMS_QUERY: &str = r#"
query GetPrograms {
  viewer {
    programs(unwatched: true, orderBy: { field: STARTED_AT, direction: DESC }) {
      nodes {
        startedAt
        channel {
          name
        }
        episode {
          number
          numberText
          title
        }
        work {
          title
          officialSiteUrl
          image {
            recommendedImageUrl
            facebookOgImageUrl
          }
        }
      }
    }
  }
}
"#;

/// Library entries currently being watched, scoped to the given seasons
pub const GET_LIBRARY_ENTRIES_QUERY: &str = r#"
query GetLibraryEntries($seasons: [String!]) {
  viewer {
    libraryEntries(states: [WATCHING], seasons: $seasons) {
      nodes {
        work {
          title
          officialSiteUrl
          image {
            recommendedImageUrl
            facebookOgImageUrl
          }
        }
        nextEpisode {
          number
          numberText
          title
        }
        nextProgram {
          startedAt
          channel {
            name
          }
        }
      }
    }
  }
}
"#;
