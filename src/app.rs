use crate::config::Config;
use crate::message::Message;
use crate::model::Section;
use crate::router::{HostRouter, MemoryRouter};
use crate::state::{
    open_section, safe_navigate, step_back_in_section, NavigationState, NavigationTracker,
};
use crate::subscription::keyboard_messages;
use eframe::egui;
use tracing::{info, warn};

/// Desktop shell: a tab bar over the in-process router.
pub struct TabTrail {
    // Navigation
    pub nav: NavigationState,
    pub tracker: NavigationTracker,
    pub router: MemoryRouter,

    // Session
    pub username: Option<String>,

    // UI State
    pub path_input: String,
    pub sign_in_input: String,
    pub error: Option<String>,
    frames: u64,
}

impl TabTrail {
    pub fn new(config: &Config) -> Self {
        Self {
            nav: NavigationState::with_capacity(config.history.max_entries),
            tracker: NavigationTracker::new(),
            router: MemoryRouter::new(config.session.start_path.clone()),
            username: config.session.username.clone(),
            path_input: config.session.start_path.clone(),
            sign_in_input: String::new(),
            error: None,
            frames: 0,
        }
    }

    pub fn title(&self) -> String {
        format!("TabTrail - {}", self.router.current_path().unwrap_or("/"))
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::OpenSection(section) => self.activate_tab(section),
            Message::NavigateTo(path) => self.navigate_to(path),
            Message::SectionBack => self.section_back(),
            Message::Back => {
                self.router.back();
            }
            Message::Forward => {
                self.router.forward();
            }
            Message::SignIn(name) => self.sign_in(name),
            Message::SignOut => self.sign_out(),
            Message::RouterReady(ready) => self.router.set_ready(ready),
            Message::PathInputChanged(value) => self.path_input = value,
        }
        self.pump_router();
    }

    /// Hands readiness changes and queued completions to the tracker.
    pub fn pump_router(&mut self) {
        let username = self.username.as_deref();
        self.tracker.sync_readiness(&mut self.nav, &self.router, username);

        let completed = self.router.drain_completed();
        if completed.is_empty() {
            return;
        }
        self.tracker
            .track_all(&mut self.nav, self.router.is_ready(), completed, username);

        if let Some(path) = self.router.current_path() {
            self.path_input = path.to_string();
        }
    }

    fn activate_tab(&mut self, section: Section) {
        match open_section(&self.nav, &mut self.router, &section, self.username.as_deref()) {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn navigate_to(&mut self, path: String) {
        match safe_navigate(&mut self.router, &path) {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn section_back(&mut self) {
        let requester = self.username.as_deref();
        match step_back_in_section(&self.nav, &mut self.tracker, &mut self.router, requester) {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn sign_in(&mut self, name: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            warn!("ignoring sign-in with empty username");
            return;
        }
        info!(username = name.as_str(), "signed in");
        self.username = Some(name);
        self.sign_in_input.clear();
    }

    fn sign_out(&mut self) {
        info!("signed out");
        self.username = None;
    }

    fn tab_bar(&self, ui: &mut egui::Ui, pending: &mut Vec<Message>) {
        ui.horizontal(|ui| {
            for section in Section::TABS.iter() {
                let selected = self.nav.is_current(section);
                if ui.selectable_label(selected, section.label()).clicked() {
                    pending.push(Message::OpenSection(section.clone()));
                }
            }
        });
    }

    fn path_bar(&mut self, ui: &mut egui::Ui, pending: &mut Vec<Message>) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.router.can_go_back(), egui::Button::new("⬅"))
                .on_hover_text("Back (Alt+Left)")
                .clicked()
            {
                pending.push(Message::Back);
            }
            if ui
                .add_enabled(self.router.can_go_forward(), egui::Button::new("➡"))
                .on_hover_text("Forward (Alt+Right)")
                .clicked()
            {
                pending.push(Message::Forward);
            }
            if ui
                .button("⬆")
                .on_hover_text("Previous page in this section (Alt+Up)")
                .clicked()
            {
                pending.push(Message::SectionBack);
            }

            let response = ui.add_sized(
                ui.available_size() - egui::vec2(8.0, 0.0),
                egui::TextEdit::singleline(&mut self.path_input),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                pending.push(Message::NavigateTo(self.path_input.clone()));
            }
        });
    }

    fn session_panel(&mut self, ui: &mut egui::Ui, pending: &mut Vec<Message>) {
        ui.heading("Session");
        ui.separator();
        match &self.username {
            Some(name) => {
                ui.label(format!("Signed in as {}", name));
                if ui.button("Sign out").clicked() {
                    pending.push(Message::SignOut);
                }
            }
            None => {
                ui.label("Not signed in");
                ui.text_edit_singleline(&mut self.sign_in_input);
                if ui.button("Sign in").clicked() {
                    pending.push(Message::SignIn(self.sign_in_input.clone()));
                }
            }
        }
        ui.add_space(10.0);
        ui.label(if self.router.is_ready() {
            "Router ready"
        } else {
            "Router starting"
        });
    }

    fn history_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Section histories");
        ui.separator();
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (section, stack) in self.nav.all_histories() {
                let title = if self.nav.is_current(&section) {
                    format!("▶ {} ({})", section.label(), stack.len())
                } else {
                    format!("{} ({})", section.label(), stack.len())
                };
                ui.collapsing(title, |ui| {
                    for path in stack.iter().rev() {
                        ui.monospace(path.as_str());
                    }
                });
            }
        });
    }
}

impl eframe::App for TabTrail {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The router finishes initializing after the first frame.
        self.frames += 1;
        if self.frames == 2 && !self.router.is_ready() {
            TabTrail::update(self, Message::RouterReady(true));
        }

        let mut pending = keyboard_messages(ctx);

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.tab_bar(ui, &mut pending);
            ui.add_space(4.0);
            self.path_bar(ui, &mut pending);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} sections visited", self.nav.history().len()));
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                }
            });
        });

        egui::SidePanel::right("session_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| self.session_panel(ui, &mut pending));

        egui::CentralPanel::default().show(ctx, |ui| self.history_panel(ui));

        for message in pending {
            TabTrail::update(self, message);
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title()));
    }
}
