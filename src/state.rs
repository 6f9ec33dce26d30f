// View state for the page. Plain data with pure transitions so it can be
// exercised without a browser; the components own a single copy through
// use_state and funnel every change through these methods.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Menu,
    Experience,
    Reservations,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Menu,
        Section::Experience,
        Section::Reservations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Menu => "Menu",
            Section::Experience => "Experience",
            Section::Reservations => "Reservations",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ViewState {
    pub is_loading: bool,
    pub active_section: Section,
    pub mobile_menu_open: bool,
    pub hovered_dish: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            is_loading: true,
            active_section: Section::Home,
            mobile_menu_open: false,
            hovered_dish: None,
        }
    }
}

impl ViewState {
    // One-way: nothing ever sets the flag back to true.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    // The drawer can only be open on narrow layouts, so closing it here
    // is a no-op everywhere else.
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
        self.close_mobile_menu();
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn set_hovered(&mut self, dish: Option<usize>) {
        self.hovered_dish = dish;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_starts_true_and_transitions_one_way() {
        let mut state = ViewState::default();
        assert!(state.is_loading);

        state.finish_loading();
        assert!(!state.is_loading);

        // No later transition may resurrect the flag.
        state.select_section(Section::Menu);
        state.toggle_mobile_menu();
        state.set_hovered(Some(1));
        state.finish_loading();
        assert!(!state.is_loading);
    }

    #[test]
    fn select_section_sets_exactly_that_section() {
        for &section in Section::ALL.iter() {
            let mut state = ViewState::default();
            state.finish_loading();
            state.set_hovered(Some(2));

            state.select_section(section);

            assert_eq!(state.active_section, section);
            assert!(!state.mobile_menu_open);
            assert_eq!(state.hovered_dish, Some(2));
            assert!(!state.is_loading);
        }
    }

    #[test]
    fn select_section_closes_an_open_drawer() {
        let mut state = ViewState::default();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);

        state.select_section(Section::Reservations);

        assert_eq!(state.active_section, Section::Reservations);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn menu_toggle_round_trips() {
        let mut state = ViewState::default();
        let initial = state.mobile_menu_open;

        state.toggle_mobile_menu();
        assert_ne!(state.mobile_menu_open, initial);

        state.toggle_mobile_menu();
        assert_eq!(state.mobile_menu_open, initial);
    }

    #[test]
    fn close_mobile_menu_is_idempotent() {
        let mut state = ViewState::default();
        state.close_mobile_menu();
        assert!(!state.mobile_menu_open);

        state.toggle_mobile_menu();
        state.close_mobile_menu();
        state.close_mobile_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn hover_reflects_the_most_recent_index_only() {
        let mut state = ViewState::default();
        assert_eq!(state.hovered_dish, None);

        state.set_hovered(Some(0));
        assert_eq!(state.hovered_dish, Some(0));

        state.set_hovered(Some(2));
        assert_eq!(state.hovered_dish, Some(2));

        state.set_hovered(None);
        assert_eq!(state.hovered_dish, None);
    }

    #[test]
    fn hover_does_not_touch_other_flags() {
        let mut state = ViewState::default();
        state.select_section(Section::Menu);
        state.toggle_mobile_menu();

        state.set_hovered(Some(1));

        assert_eq!(state.active_section, Section::Menu);
        assert!(state.mobile_menu_open);
        assert!(state.is_loading);
    }
}
