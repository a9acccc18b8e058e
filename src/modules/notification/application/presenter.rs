use crate::modules::notification::domain::Block;
use crate::modules::program::domain::Program;
use crate::modules::season::{reference_time, ReferenceDateTime};
use crate::shared::config::DEFAULT_LIMIT_NUM_TO_DISPLAY;
use crate::shared::errors::AppError;

const UNSCHEDULED: &str = "未定";
const NO_TODAY_PROGRAMS: &str = "本日の放送予定は見つかりませんでした。";
const NO_LIBRARY_ENTRIES: &str = "未視聴のアニメは見つかりませんでした。";
const LIBRARY_HEADER: &str = ":eyes: 未視聴のアニメ";

/// Renders aggregated programs into chat messages
pub trait ProgramPresenter: Send + Sync {
    fn format_combined_programs(
        &self,
        today_programs: &[Program],
        library_entries: &[Program],
        reference_date: &ReferenceDateTime,
    ) -> Vec<Block>;

    fn format_error(&self, err: &AppError) -> String;

    /// Plain-text notification line sent alongside the blocks
    fn fallback_text(&self, reference_date: &ReferenceDateTime) -> String;
}

/// Slack Block Kit presenter
#[derive(Debug, Clone)]
pub struct SlackProgramPresenter {
    limit_num_to_display: usize,
}

impl Default for SlackProgramPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT_NUM_TO_DISPLAY)
    }
}

impl SlackProgramPresenter {
    pub fn new(limit_num_to_display: usize) -> Self {
        Self {
            limit_num_to_display,
        }
    }

    fn format_program_list(programs: &[Program]) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(programs.len() * 2);
        for program in programs {
            blocks.push(Block::section(Self::format_program_text(program)));
            if let Some(image_url) = program.image_url() {
                blocks.push(Block::image(
                    image_url,
                    format!("{} image", program.work.title),
                ));
            }
        }
        blocks
    }

    fn format_program_text(program: &Program) -> String {
        let title = escape_mrkdwn(&program.work.title);
        let title_line = match program.work.official_site_url.as_deref() {
            Some(url) => format!("<{}|{}>", url, title),
            None => format!("*{}*", title),
        };

        let episode_line = match program.episode.title.as_deref() {
            Some(episode_title) => format!(
                " • {} 「{}」",
                program.episode.number_text,
                escape_mrkdwn(episode_title)
            ),
            None => format!(" • {}", program.episode.number_text),
        };

        let air_time = match &program.start_time {
            Some(start) => format!(
                "{} {}",
                reference_time::format_date(start),
                reference_time::format_time(start)
            ),
            None => UNSCHEDULED.to_string(),
        };
        let channel_line = format!(
            " • :tv: {} {}",
            escape_mrkdwn(&program.channel.name),
            air_time
        );

        format!("{}\n{}\n{}", title_line, episode_line, channel_line)
    }
}

impl ProgramPresenter for SlackProgramPresenter {
    fn format_combined_programs(
        &self,
        today_programs: &[Program],
        library_entries: &[Program],
        reference_date: &ReferenceDateTime,
    ) -> Vec<Block> {
        let mut blocks = vec![Block::header(format!(
            ":calendar: {} 放送予定のアニメ",
            reference_time::format_date(reference_date)
        ))];

        if today_programs.is_empty() {
            blocks.push(Block::section(NO_TODAY_PROGRAMS));
        } else {
            blocks.extend(Self::format_program_list(today_programs));
        }

        blocks.push(Block::Divider);
        blocks.push(Block::header(LIBRARY_HEADER));

        if library_entries.is_empty() {
            blocks.push(Block::section(NO_LIBRARY_ENTRIES));
        } else {
            let shown = library_entries.len().min(self.limit_num_to_display);
            blocks.extend(Self::format_program_list(&library_entries[..shown]));
        }

        blocks
    }

    fn format_error(&self, err: &AppError) -> String {
        format!(":warning: エラーが発生しました:\n```{}```", err)
    }

    fn fallback_text(&self, reference_date: &ReferenceDateTime) -> String {
        format!(
            "{} のアニメ情報 + 未視聴",
            reference_time::format_date(reference_date)
        )
    }
}

/// Escape the characters Slack mrkdwn treats as control sequences
pub fn escape_mrkdwn(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
