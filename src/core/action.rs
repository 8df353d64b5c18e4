//! # Actions
//!
//! Everything that can happen in Roam becomes an `Action`.
//! User presses `r`? That's `Action::Refresh`.
//! A flag image resolves? That's `Action::CountryCard(publication)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning an `Effect` for the shell to execute.
//! No I/O here: fetches are spawned by the event loop in response to
//! effects, and their completions come back in as actions. Because every
//! action is applied on one event loop, generation checks and slot writes
//! need no locking.

use log::{debug, warn};

use crate::core::state::{App, CardSlot, Screen};
use crate::fetch::aggregator::Publication;
use crate::fetch::error::AppError;
use crate::fetch::model::{Attraction, Country};

#[derive(Debug)]
pub enum Action {
    /// Re-fetch the country list from the endpoint.
    Refresh,
    /// The list fetch for `generation` finished.
    CountriesLoaded {
        generation: u64,
        result: Result<Vec<Country>, AppError>,
    },
    /// A country's flag image settled.
    CountryCard(Publication<Country>),
    /// An attraction's image settled.
    AttractionCard(Publication<Attraction>),
    MoveUp,
    MoveDown,
    /// Open the selected country's attractions.
    Open,
    /// Leave the attraction screen.
    Back,
    Quit,
}

/// What the shell should do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Start a list fetch under a fresh generation.
    LoadCountries,
    /// Resolve flag images for the current country slots.
    ResolveCountryImages,
    /// Resolve images for the current attraction slots under a fresh
    /// generation.
    ResolveAttractionImages,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh => {
            app.screen = Screen::Countries;
            app.selected = 0;
            app.is_loading = true;
            app.error = None;
            app.status_message = String::from("Loading countries...");
            Effect::LoadCountries
        }

        Action::CountriesLoaded { generation, result } => {
            if generation != app.generation {
                debug!(
                    "ignoring stale list result (generation {generation}, current {})",
                    app.generation
                );
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(countries) => {
                    app.status_message = format!("{} countries", countries.len());
                    app.countries = countries.into_iter().map(CardSlot::Pending).collect();
                    app.error = None;
                    Effect::ResolveCountryImages
                }
                Err(e) => {
                    // Fatal to this attempt: no partial list is ever shown.
                    warn!("country list fetch failed: {e}");
                    app.countries.clear();
                    app.error = Some(e.to_string());
                    app.status_message = String::from("Load failed");
                    Effect::None
                }
            }
        }

        Action::CountryCard(publication) => {
            if publication.generation != app.generation {
                debug!(
                    "ignoring stale country card (generation {}, current {})",
                    publication.generation, app.generation
                );
                return Effect::None;
            }
            if let Some(slot) = app.countries.get_mut(publication.index) {
                *slot = CardSlot::Ready(publication.view_model);
            }
            Effect::None
        }

        Action::AttractionCard(publication) => {
            if publication.generation != app.generation {
                debug!(
                    "ignoring stale attraction card (generation {}, current {})",
                    publication.generation, app.generation
                );
                return Effect::None;
            }
            if let Some(slot) = app.attractions.get_mut(publication.index) {
                *slot = CardSlot::Ready(publication.view_model);
            }
            Effect::None
        }

        Action::MoveUp => {
            app.selected = app.selected.saturating_sub(1);
            Effect::None
        }

        Action::MoveDown => {
            if app.selected + 1 < app.visible_len() {
                app.selected += 1;
            }
            Effect::None
        }

        Action::Open => {
            if app.screen != Screen::Countries {
                return Effect::None;
            }
            let Some(slot) = app.countries.get(app.selected) else {
                return Effect::None;
            };
            let country = slot.record();
            app.attractions = country
                .attractions
                .iter()
                .cloned()
                .map(CardSlot::Pending)
                .collect();
            app.status_message = format!("{} attractions in {}", app.attractions.len(), country.name);
            app.screen = Screen::Attractions {
                country: app.selected,
            };
            app.selected = 0;
            Effect::ResolveAttractionImages
        }

        Action::Back => match app.screen {
            Screen::Attractions { country } => {
                app.screen = Screen::Countries;
                app.selected = country.min(app.countries.len().saturating_sub(1));
                app.attractions.clear();
                // No image cache: flags are re-resolved under a new generation.
                app.countries = std::mem::take(&mut app.countries)
                    .into_iter()
                    .map(|slot| CardSlot::Pending(slot.into_record()))
                    .collect();
                app.status_message = format!("{} countries", app.countries.len());
                Effect::ResolveCountryImages
            }
            Screen::Countries => Effect::None,
        },

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::aggregator::{ImageSlot, ViewModel};

    fn attraction(id: &str) -> Attraction {
        Attraction {
            id: id.to_string(),
            country_id: "1".to_string(),
            name: format!("Attraction {id}"),
            description: "A place worth seeing".to_string(),
            image: Some(format!("http://x/{id}.png")),
        }
    }

    fn country(id: &str, attraction_count: usize) -> Country {
        Country {
            id: id.to_string(),
            name: format!("Country {id}"),
            population: 42,
            flag_url: Some(format!("http://x/{id}-flag.png")),
            attractions: (0..attraction_count)
                .map(|i| attraction(&format!("{id}-a{i}")))
                .collect(),
        }
    }

    fn loaded_app(countries: Vec<Country>) -> App {
        let mut app = App::new("http://api/Country".to_string());
        app.generation = 1;
        let effect = update(
            &mut app,
            Action::CountriesLoaded {
                generation: 1,
                result: Ok(countries),
            },
        );
        assert_eq!(effect, Effect::ResolveCountryImages);
        app
    }

    fn fallback_publication(generation: u64, index: usize, record: Country) -> Publication<Country> {
        Publication {
            generation,
            index,
            view_model: ViewModel {
                record,
                image: ImageSlot::Fallback(AppError::BadStatus(404)),
            },
        }
    }

    #[test]
    fn test_refresh_resets_and_requests_load() {
        let mut app = loaded_app(vec![country("1", 0)]);
        app.error = Some("old error".to_string());

        let effect = update(&mut app, Action::Refresh);
        assert_eq!(effect, Effect::LoadCountries);
        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.screen, Screen::Countries);
    }

    #[test]
    fn test_countries_loaded_failure_is_fatal_and_empty() {
        let mut app = loaded_app(vec![country("1", 0), country("2", 0)]);
        let effect = update(
            &mut app,
            Action::CountriesLoaded {
                generation: 1,
                result: Err(AppError::BadStatus(500)),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(app.countries.is_empty());
        assert_eq!(app.error.as_deref(), Some("bad status code: 500"));
    }

    #[test]
    fn test_stale_list_result_is_ignored() {
        let mut app = loaded_app(vec![country("1", 0)]);
        app.generation = 2;

        let effect = update(
            &mut app,
            Action::CountriesLoaded {
                generation: 1,
                result: Ok(vec![]),
            },
        );
        assert_eq!(effect, Effect::None);
        // The generation-1 result did not replace the list.
        assert_eq!(app.countries.len(), 1);
    }

    #[test]
    fn test_country_card_settles_slot() {
        let mut app = loaded_app(vec![country("1", 0), country("2", 0)]);
        assert!(app.countries[1].view_model().is_none());

        let record = app.countries[1].record().clone();
        update(&mut app, Action::CountryCard(fallback_publication(1, 1, record)));

        let vm = app.countries[1].view_model().expect("slot should settle");
        assert_eq!(vm.record.name, "Country 2");
        assert_eq!(vm.error(), Some(&AppError::BadStatus(404)));
        // Sibling untouched.
        assert!(app.countries[0].view_model().is_none());
    }

    #[test]
    fn test_stale_publication_is_discarded() {
        let mut app = loaded_app(vec![country("1", 0)]);
        let record = app.countries[0].record().clone();

        app.generation = 5;
        update(&mut app, Action::CountryCard(fallback_publication(1, 0, record)));

        assert!(app.countries[0].view_model().is_none());
    }

    #[test]
    fn test_open_builds_attraction_slots() {
        let mut app = loaded_app(vec![country("1", 2)]);
        let effect = update(&mut app, Action::Open);
        assert_eq!(effect, Effect::ResolveAttractionImages);
        assert_eq!(app.screen, Screen::Attractions { country: 0 });
        assert_eq!(app.attractions.len(), 2);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_back_restores_countries_and_resolves_flags_again() {
        let mut app = loaded_app(vec![country("1", 1), country("2", 0)]);
        app.selected = 1;
        update(&mut app, Action::Open);

        let effect = update(&mut app, Action::Back);
        assert_eq!(effect, Effect::ResolveCountryImages);
        assert_eq!(app.screen, Screen::Countries);
        assert_eq!(app.selected, 1);
        assert!(app.attractions.is_empty());
        // Slots are Pending again: images get recomputed, not cached.
        assert!(app.countries.iter().all(|s| s.view_model().is_none()));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = loaded_app(vec![country("1", 0), country("2", 0)]);

        update(&mut app, Action::MoveUp);
        assert_eq!(app.selected, 0);

        update(&mut app, Action::MoveDown);
        assert_eq!(app.selected, 1);
        update(&mut app, Action::MoveDown);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new("http://api/Country".to_string());
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
