//! # Application State
//!
//! Core presentation state for Roam. This module contains domain logic
//! only - nothing in here knows about ratatui.
//!
//! ```text
//! App
//! ├── endpoint: String                     // country-list URL
//! ├── countries: Vec<CardSlot<Country>>    // current list, one slot per record
//! ├── attractions: Vec<CardSlot<Attraction>> // slots for the open country
//! ├── screen: Screen                       // which list is showing
//! ├── selected: usize                      // cursor within the visible list
//! ├── generation: u64                      // current fetch generation
//! ├── is_loading: bool                     // list fetch in flight
//! ├── error: Option<String>               // fatal list-fetch error
//! └── status_message: String              // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! driven from a single event loop. Background fetches never touch this
//! struct directly; they send actions.

use crate::fetch::aggregator::ViewModel;
use crate::fetch::model::{Attraction, Country};

/// Per-record presentation slot. Every record starts `Pending` and settles
/// exactly once per generation when its publication arrives.
#[derive(Debug, Clone)]
pub enum CardSlot<R> {
    Pending(R),
    Ready(ViewModel<R>),
}

impl<R> CardSlot<R> {
    /// The underlying record, settled or not.
    pub fn record(&self) -> &R {
        match self {
            CardSlot::Pending(record) => record,
            CardSlot::Ready(vm) => &vm.record,
        }
    }

    pub fn into_record(self) -> R {
        match self {
            CardSlot::Pending(record) => record,
            CardSlot::Ready(vm) => vm.record,
        }
    }

    pub fn view_model(&self) -> Option<&ViewModel<R>> {
        match self {
            CardSlot::Pending(_) => None,
            CardSlot::Ready(vm) => Some(vm),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Countries,
    /// Attractions of the country at this index in `App::countries`.
    Attractions { country: usize },
}

pub struct App {
    pub endpoint: String,
    pub countries: Vec<CardSlot<Country>>,
    pub attractions: Vec<CardSlot<Attraction>>,
    pub screen: Screen,
    pub selected: usize,
    /// The fetch generation currently allowed to mutate this state.
    /// Publications and list results from older generations are ignored.
    pub generation: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            countries: Vec::new(),
            attractions: Vec::new(),
            screen: Screen::Countries,
            selected: 0,
            generation: 0,
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to Roam!"),
        }
    }

    /// Number of rows in whichever list is currently showing.
    pub fn visible_len(&self) -> usize {
        match self.screen {
            Screen::Countries => self.countries.len(),
            Screen::Attractions { .. } => self.attractions.len(),
        }
    }
}
