// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a notification stack.
//!
//! The `App` produces the three card kinds on demand and simulates long
//! running jobs so that capacity protection and the busy-keeps-visible idle
//! policy can be observed interactively.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, StackConfig};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{
    ItemId, NotificationItem, NotificationStack, ProgressCard, ProgressTracker, ScreenshotCard,
    StatusCard, Toast,
};
use iced::widget::{button, text, Column, Container, Stack, Text};
use iced::{Element, Length, Subscription, Task};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between two progress steps of a simulated job.
const JOB_STEP: Duration = Duration::from_millis(400);

/// Progress added by each simulated step.
const JOB_STEP_PERCENT: u8 = 10;

/// A simulated job and the card that reports it.
struct Job {
    card: ItemId,
    tracker: ProgressTracker,
}

/// Root Iced application state.
pub struct App {
    notifications: NotificationStack,
    jobs: HashMap<u32, Job>,
    next_job: u32,
    screenshots_taken: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications.len())
            .field("jobs", &self.jobs.len())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

/// Resolves the effective configuration: file (explicit or per-user) first,
/// then command-line overrides.
fn resolve_config(flags: &Flags) -> StackConfig {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read notification config, using defaults");
        StackConfig::default()
    });

    if flags.capacity.is_some() {
        config.capacity = flags.capacity;
    }
    if flags.idle_timeout_secs.is_some() {
        config.idle_timeout_secs = flags.idle_timeout_secs;
    }
    config
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = resolve_config(&flags);
        tracing::info!(
            capacity = config.capacity().get(),
            idle_timeout_secs = config.idle_timeout().secs(),
            "starting notification stack demo"
        );

        let app = App {
            notifications: NotificationStack::from_config(&config),
            jobs: HashMap::new(),
            next_job: 1,
            screenshots_taken: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Notification Stack".to_string()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.notifications
            .subscription()
            .map(Message::Notification)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::AddStatus => {
                let card = StatusCard::new("Recording started").with_body("Press again to stop");
                self.post(card);
                Task::none()
            }
            Message::StartJob => self.start_job(),
            Message::JobStep(job) => self.advance_job(job),
            Message::TakeScreenshot => {
                self.screenshots_taken += 1;
                let path = dirs::picture_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(format!("screenshot-{}.png", self.screenshots_taken));
                self.post(ScreenshotCard::new(path));
                Task::none()
            }
        };

        for event in self.notifications.take_events() {
            tracing::trace!(?event, "notification stack event");
        }
        task
    }

    fn view(&self) -> Element<'_, Message> {
        let status = format!(
            "{} card(s), {}",
            self.notifications.len(),
            if self.notifications.is_visible() {
                "shown"
            } else {
                "hidden"
            }
        );

        let controls = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::LG)
            .push(Text::new("Notification stack").size(typography::TITLE_MD))
            .push(button(text("Status notice")).on_press(Message::AddStatus))
            .push(button(text("Start encoding job")).on_press(Message::StartJob))
            .push(button(text("Take screenshot")).on_press(Message::TakeScreenshot))
            .push(Text::new(status).size(typography::CAPTION));

        Stack::new()
            .push(
                Container::new(controls)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(Toast::view_overlay(&self.notifications).map(Message::Notification))
            .into()
    }

    fn post<I: NotificationItem + 'static>(&mut self, card: I) {
        if let Err(err) = self.notifications.add(card) {
            tracing::warn!(error = %err, "notification rejected");
        }
    }

    fn start_job(&mut self) -> Task<Message> {
        let job = self.next_job;
        self.next_job += 1;

        let (card, tracker) = ProgressCard::new(format!("Encoding clip {job}"));
        let id = card.id();
        if let Err(err) = self.notifications.add(card) {
            tracing::warn!(error = %err, "progress notification rejected");
            return Task::none();
        }
        self.jobs.insert(job, Job { card: id, tracker });
        schedule_step(job)
    }

    fn advance_job(&mut self, job: u32) -> Task<Message> {
        let Some(state) = self.jobs.get(&job) else {
            return Task::none();
        };

        // Dismissed by the user: stop the simulated work
        if !self.notifications.contains(state.card) {
            tracing::debug!(job, "job card dismissed, cancelling");
            self.jobs.remove(&job);
            return Task::none();
        }

        let percent = state.tracker.percent().saturating_add(JOB_STEP_PERCENT);
        if percent >= 100 {
            state.tracker.finish();
            self.jobs.remove(&job);
            Task::none()
        } else {
            state.tracker.set_percent(percent);
            schedule_step(job)
        }
    }
}

fn schedule_step(job: u32) -> Task<Message> {
    Task::perform(
        async { tokio::time::sleep(JOB_STEP).await },
        move |()| Message::JobStep(job),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::NotificationMessage;
    use std::fs;
    use tempfile::tempdir;

    fn test_app() -> App {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("notifications.toml");
        fs::write(&path, "capacity = 2\n").expect("failed to write config");
        let (app, _task) = App::new(Flags {
            config_path: Some(path),
            ..Flags::default()
        });
        app
    }

    #[test]
    fn flags_override_config_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("notifications.toml");
        fs::write(&path, "capacity = 2\nidle_timeout_secs = 9\n").expect("failed to write config");

        let config = resolve_config(&Flags {
            config_path: Some(path),
            capacity: Some(4),
            idle_timeout_secs: None,
        });
        assert_eq!(config.capacity().get(), 4);
        assert_eq!(config.idle_timeout().secs(), 9);
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = resolve_config(&Flags {
            config_path: Some(temp_dir.path().join("absent.toml")),
            ..Flags::default()
        });
        assert_eq!(config, StackConfig::default());
    }

    #[test]
    fn add_status_shows_stack() {
        let mut app = test_app();
        let _ = app.update(Message::AddStatus);
        assert_eq!(app.notifications.len(), 1);
        assert!(app.notifications.is_visible());
    }

    #[test]
    fn running_job_survives_capacity_pressure() {
        let mut app = test_app();
        let _ = app.update(Message::StartJob);
        for _ in 0..3 {
            let _ = app.update(Message::AddStatus);
        }
        assert_eq!(app.notifications.len(), 3);
        assert!(app.notifications.has_unfinished());
    }

    #[test]
    fn job_steps_finish_the_card() {
        let mut app = test_app();
        let _ = app.update(Message::StartJob);
        for _ in 0..10 {
            let _ = app.update(Message::JobStep(1));
        }
        assert!(app.jobs.is_empty());
        assert!(!app.notifications.has_unfinished());
    }

    #[test]
    fn dismissed_job_is_cancelled() {
        let mut app = test_app();
        let _ = app.update(Message::StartJob);
        let card = app.jobs[&1].card;

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(card)));
        let _ = app.update(Message::JobStep(1));
        assert!(app.jobs.is_empty());
    }

    #[test]
    fn screenshots_stay_mutually_exclusive() {
        let mut app = test_app();
        let _ = app.update(Message::TakeScreenshot);
        let _ = app.update(Message::TakeScreenshot);
        assert_eq!(app.screenshots_taken, 2);
        assert!(app.notifications.expanded().is_some());
    }
}
