use episodes_lib::types::{Character, Episode};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct EpisodeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Air Date")]
    #[serde(rename = "Air Date")]
    air_date: String,
    #[tabled(rename = "Characters")]
    #[serde(rename = "Characters")]
    characters: usize,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_episode_rows(episodes: &[Episode]) -> Vec<EpisodeRow> {
    episodes
        .iter()
        .map(|e| EpisodeRow {
            id: e.id,
            code: e.episode.clone(),
            name: e.name.clone(),
            air_date: format_air_date(e),
            characters: e.characters.len(),
        })
        .collect()
}

fn build_detail_rows(episode: &Episode) -> Vec<FieldRow> {
    let season = episode
        .season_and_number()
        .map(|(season, number)| format!("Season {}, episode {}", season, number))
        .unwrap_or_else(|| "-".to_string());
    let character_ids = episode
        .character_ids()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        field_row("ID", episode.id.to_string()),
        field_row("Name", episode.name.clone()),
        field_row("Code", episode.episode.clone()),
        field_row("Season", season),
        field_row("Air Date", format_air_date(episode)),
        field_row("Characters", character_ids),
        field_row("URL", episode.url.clone()),
    ]
}

fn build_character_rows(character: &Character) -> Vec<FieldRow> {
    vec![
        field_row("ID", character.id.to_string()),
        field_row("Name", character.name.clone()),
        field_row("Status", character.status.clone()),
        field_row("Species", character.species.clone()),
        field_row("Gender", character.gender.clone()),
        field_row("Origin", character.origin.name.clone()),
        field_row("Location", character.location.name.clone()),
        field_row("Episodes", character.episode_count().to_string()),
        field_row("Image", character.image.clone()),
    ]
}

fn field_row(field: &'static str, value: String) -> FieldRow {
    FieldRow { field, value }
}

/// ISO date when the air date parses, raw text otherwise.
fn format_air_date(episode: &Episode) -> String {
    episode
        .air_date_parsed()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| episode.air_date.clone())
}

// -- Table output --

pub fn print_episodes_table(episodes: &[Episode]) {
    println!("{}", Table::new(build_episode_rows(episodes)));
}

pub fn print_episode_detail(episode: &Episode) {
    let mut table = Table::new(build_detail_rows(episode));
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_character_detail(character: &Character) {
    let mut table = Table::new(build_character_rows(character));
    table.with(Style::rounded());
    println!("{}", table);
}

// -- Markdown output --

pub fn print_episodes_markdown(episodes: &[Episode]) {
    let mut table = Table::new(build_episode_rows(episodes));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
