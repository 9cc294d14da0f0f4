//! View-model state behind the rendered widgets.
//!
//! The containers here own what is on screen; `ui` only draws them each
//! frame. `ShowList` is the results container (full replace on every
//! successful search), `EpisodePanel` backs the episode modal (cleared
//! before every open).

use ratatui::widgets::ListState;
use tvscout_core::{Episode, Show};

/// Shown in place of artwork for shows without an image.
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// One rendered show card.
///
/// Carries the owning show's id so the episode controller can resolve which
/// show was activated, independent of render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub show_id: u64,
    pub name: String,
    pub summary: String,
    pub image_url: String,
}

impl From<&Show> for Card {
    fn from(show: &Show) -> Self {
        Self {
            show_id: show.id,
            name: show.name.clone(),
            summary: show.summary.clone(),
            image_url: show
                .image_url
                .clone()
                .unwrap_or_else(|| MISSING_IMAGE_URL.to_string()),
        }
    }
}

/// The results container: a full-replace list of show cards.
#[derive(Debug, Default)]
pub struct ShowList {
    cards: Vec<Card>,
    pub state: ListState,
}

impl ShowList {
    /// Replace every previous card with one card per show. Last call wins;
    /// nothing accumulates across searches.
    pub fn replace(&mut self, shows: &[Show]) {
        self.cards = shows.iter().map(Card::from).collect();
        self.state = ListState::default();
        if !self.cards.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card whose "Episodes" control is currently active.
    pub fn selected(&self) -> Option<&Card> {
        self.state.selected().and_then(|i| self.cards.get(i))
    }

    pub fn select_next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.cards.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.cards.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

/// The episode modal's list: cleared before every render so a prior show's
/// entries never linger.
#[derive(Debug, Default)]
pub struct EpisodePanel {
    lines: Vec<String>,
    pub state: ListState,
}

impl EpisodePanel {
    /// Drop whatever the previous show left behind.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.state = ListState::default();
    }

    /// Append one formatted line per episode.
    pub fn render(&mut self, episodes: &[Episode]) {
        self.lines.extend(episodes.iter().map(episode_line));
        if !self.lines.is_empty() && self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn select_next(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.lines.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.lines.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

/// The modal's line format for one episode.
pub fn episode_line(episode: &Episode) -> String {
    format!(
        "{}, Season {} Episode # {}",
        episode.name, episode.season, episode.number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: u64, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: format!("<p>About {}.</p>", name),
            image_url: None,
        }
    }

    fn episode(name: &str, season: u32, number: u32) -> Episode {
        Episode {
            id: season as u64 * 100 + number as u64,
            name: name.to_string(),
            season,
            number,
        }
    }

    #[test]
    fn replace_builds_one_card_per_show_tagged_with_its_id() {
        let mut list = ShowList::default();
        list.replace(&[show(1, "Batman"), show(2, "Batwoman")]);

        let ids: Vec<u64> = list.cards().iter().map(|c| c.show_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn replace_drops_all_previous_cards() {
        let mut list = ShowList::default();
        list.replace(&[show(1, "A"), show(2, "B"), show(3, "C")]);
        list.replace(&[show(9, "D")]);

        assert_eq!(list.cards().len(), 1);
        assert_eq!(list.cards()[0].show_id, 9);
    }

    #[test]
    fn card_without_artwork_uses_the_placeholder() {
        let card = Card::from(&show(5, "Obscure"));
        assert_eq!(card.image_url, MISSING_IMAGE_URL);
    }

    #[test]
    fn card_with_artwork_keeps_the_medium_url() {
        let mut s = show(5, "Famous");
        s.image_url = Some("https://static.tvmaze.com/5_medium.jpg".to_string());

        let card = Card::from(&s);
        assert_eq!(card.image_url, "https://static.tvmaze.com/5_medium.jpg");
    }

    #[test]
    fn summaries_pass_through_unmodified() {
        let card = Card::from(&show(5, "Markup"));
        assert_eq!(card.summary, "<p>About Markup.</p>");
    }

    #[test]
    fn activation_resolves_the_selected_cards_id() {
        let mut list = ShowList::default();
        list.replace(&[show(7, "First"), show(42, "Target"), show(99, "Last")]);

        list.select_next();
        assert_eq!(list.selected().map(|c| c.show_id), Some(42));
    }

    #[test]
    fn selection_wraps_at_both_ends() {
        let mut list = ShowList::default();
        list.replace(&[show(1, "A"), show(2, "B")]);

        list.select_prev();
        assert_eq!(list.selected().map(|c| c.show_id), Some(2));
        list.select_next();
        assert_eq!(list.selected().map(|c| c.show_id), Some(1));
    }

    #[test]
    fn episode_line_matches_the_modal_format() {
        assert_eq!(
            episode_line(&episode("Pilot", 1, 1)),
            "Pilot, Season 1 Episode # 1"
        );
    }

    #[test]
    fn panel_renders_one_line_per_episode() {
        let mut panel = EpisodePanel::default();
        panel.render(&[episode("Pilot", 1, 1), episode("Two", 1, 2)]);

        assert_eq!(
            panel.lines(),
            &[
                "Pilot, Season 1 Episode # 1".to_string(),
                "Two, Season 1 Episode # 2".to_string(),
            ]
        );
    }

    #[test]
    fn reopening_for_another_show_leaves_only_its_lines() {
        let mut panel = EpisodePanel::default();
        panel.render(&[episode("From Show A", 1, 1)]);

        panel.clear();
        panel.render(&[episode("From Show B", 3, 4)]);

        assert_eq!(panel.lines(), &["From Show B, Season 3 Episode # 4".to_string()]);
    }

    #[test]
    fn zero_episodes_renders_an_empty_panel() {
        let mut panel = EpisodePanel::default();
        panel.clear();
        panel.render(&[]);

        assert!(panel.lines().is_empty());
        assert_eq!(panel.state.selected(), None);
    }
}
