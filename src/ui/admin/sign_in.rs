// SPDX-License-Identifier: MPL-2.0
//! Administrator sign-in component.
//!
//! The form collects credentials and hands them to the application as an
//! effect; the application performs the network round trip and reports back
//! with `SignInCompleted`. While a request is in flight the submit button is
//! disabled so credentials cannot be double-submitted.

use crate::backend::AdminUser;
use crate::error::AuthError;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the sign-in widgets.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
    /// The sign-in round trip finished.
    SignInCompleted(Result<AdminUser, AuthError>),
    SignOutPressed,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the sign-in flow with these credentials.
    SubmitCredentials { email: String, password: String },
}

/// Sign-in component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    in_flight: bool,
    error_key: Option<&'static str>,
    session: Option<AdminUser>,
}

impl State {
    #[must_use]
    pub fn session(&self) -> Option<&AdminUser> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    /// Handles a sign-in message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                self.error_key = None;
                Effect::None
            }
            Message::PasswordChanged(password) => {
                self.password = password;
                self.error_key = None;
                Effect::None
            }
            Message::SubmitPressed => {
                if self.in_flight || self.email.is_empty() || self.password.is_empty() {
                    return Effect::None;
                }
                self.in_flight = true;
                self.error_key = None;
                Effect::SubmitCredentials {
                    email: self.email.clone(),
                    password: self.password.clone(),
                }
            }
            Message::SignInCompleted(result) => {
                self.in_flight = false;
                match result {
                    Ok(session) => {
                        self.session = Some(session);
                        self.password.clear();
                        self.error_key = None;
                    }
                    Err(error) => {
                        self.error_key = Some(error.i18n_key());
                    }
                }
                Effect::None
            }
            Message::SignOutPressed => {
                // Dropping the session token is the whole sign-out.
                self.session = None;
                self.password.clear();
                Effect::None
            }
        }
    }

    /// Renders the sign-in form or the signed-in summary.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let content = match &self.session {
            Some(session) => self.view_session(session, i18n),
            None => self.view_form(i18n),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn view_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("admin-sign-in-title"))
            .size(typography::TITLE_MD)
            .color(theme::heading_text_color());

        let email = text_input(&i18n.tr("admin-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let password = text_input(&i18n.tr("admin-password-placeholder"), &self.password)
            .secure(true)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM)
            .size(typography::BODY);

        let submit_label = if self.in_flight {
            i18n.tr("admin-sign-in-pending")
        } else {
            i18n.tr("admin-sign-in-button")
        };
        let submit = if self.in_flight {
            button(Text::new(submit_label))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::disabled())
        } else {
            button(Text::new(submit_label))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::SubmitPressed)
        };

        let mut form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(title)
            .push(email)
            .push(password);

        if let Some(error_key) = self.error_key {
            form = form.push(
                Text::new(i18n.tr(error_key))
                    .size(typography::BODY_SM)
                    .color(theme::error_text_color()),
            );
        }

        Container::new(form.push(submit))
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }

    fn view_session<'a>(&'a self, session: &'a AdminUser, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("admin-signed-in-title"))
            .size(typography::TITLE_MD)
            .color(theme::heading_text_color());

        let identity = match &session.display_name {
            Some(name) => format!("{name} <{}>", session.email),
            None => session.email.clone(),
        };

        let summary = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(title)
            .push(
                Text::new(identity)
                    .size(typography::BODY)
                    .color(theme::body_text_color()),
            )
            .push(
                button(Text::new(i18n.tr("admin-sign-out-button")))
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::outline)
                    .on_press(Message::SignOutPressed),
            );

        Container::new(summary)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminUser {
        AdminUser::for_tests("uid-1", "admin@santis.cl", None)
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut state = State::default();
        assert_eq!(state.update(Message::SubmitPressed), Effect::None);

        let _ = state.update(Message::EmailChanged("admin@santis.cl".to_string()));
        assert_eq!(state.update(Message::SubmitPressed), Effect::None);

        let _ = state.update(Message::PasswordChanged("secret".to_string()));
        assert_eq!(
            state.update(Message::SubmitPressed),
            Effect::SubmitCredentials {
                email: "admin@santis.cl".to_string(),
                password: "secret".to_string(),
            }
        );
        assert!(state.is_in_flight());
    }

    #[test]
    fn in_flight_blocks_resubmission() {
        let mut state = State::default();
        let _ = state.update(Message::EmailChanged("admin@santis.cl".to_string()));
        let _ = state.update(Message::PasswordChanged("secret".to_string()));
        let _ = state.update(Message::SubmitPressed);

        assert_eq!(state.update(Message::SubmitPressed), Effect::None);
    }

    #[test]
    fn failed_sign_in_surfaces_the_error_key() {
        let mut state = State::default();
        let _ = state.update(Message::EmailChanged("admin@santis.cl".to_string()));
        let _ = state.update(Message::PasswordChanged("secret".to_string()));
        let _ = state.update(Message::SubmitPressed);

        let _ = state.update(Message::SignInCompleted(Err(AuthError::NotAdmin)));

        assert!(!state.is_in_flight());
        assert_eq!(state.error_key(), Some("error-auth-not-admin"));
        assert!(state.session().is_none());
    }

    #[test]
    fn successful_sign_in_stores_session_and_clears_password() {
        let mut state = State::default();
        let _ = state.update(Message::EmailChanged("admin@santis.cl".to_string()));
        let _ = state.update(Message::PasswordChanged("secret".to_string()));
        let _ = state.update(Message::SubmitPressed);

        let _ = state.update(Message::SignInCompleted(Ok(admin())));

        assert!(state.session().is_some());
        assert!(state.error_key().is_none());

        // Submitting again must not leak the old password.
        assert_eq!(state.update(Message::SubmitPressed), Effect::None);
    }

    #[test]
    fn sign_out_discards_the_session() {
        let mut state = State::default();
        let _ = state.update(Message::SignInCompleted(Ok(admin())));
        let _ = state.update(Message::SignOutPressed);
        assert!(state.session().is_none());
    }

    #[test]
    fn typing_clears_a_previous_error() {
        let mut state = State::default();
        let _ = state.update(Message::SignInCompleted(Err(AuthError::InvalidCredentials)));
        assert!(state.error_key().is_some());

        let _ = state.update(Message::EmailChanged("a".to_string()));
        assert!(state.error_key().is_none());
    }
}
