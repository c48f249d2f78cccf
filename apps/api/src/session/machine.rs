//! Session state machine: everything the client UI holds between requests.
//!
//! `Session::apply` is pure: it takes the current session and one event and
//! returns the next session, at most one side effect for the client to run,
//! and at most one notice to show. Events that make no sense in the current
//! phase return the session unchanged.
//!
//! ```text
//! Input --Submit--> Generating --Succeeded--> Preview <--Save/Cancel-- Editing
//!   ^                   |                        |  --StartEdit-->       |
//!   +-----Failed--------+                        +------ Reset ----------+--> Input
//! ```

use crate::export::{ExportFormat, ExportRequest};
use crate::rpp::models::LessonPlanRequest;
use crate::session::form::{Field, FormState};

pub const MSG_INCOMPLETE_FORM: &str =
    "Mohon lengkapi data nama guru, nama sekolah, mata pelajaran, kelas, dan materi ajar";
pub const MSG_GENERATED: &str = "RPP berhasil dibuat!";
pub const MSG_GENERATION_FAILED: &str = "Terjadi kesalahan saat membuat RPP";
pub const MSG_SAVED: &str = "RPP berhasil disimpan!";
pub const MSG_COPIED: &str = "RPP berhasil disalin ke clipboard!";
pub const MSG_COPY_FAILED: &str = "Gagal menyalin ke clipboard";
pub const MSG_DOWNLOADED_TXT: &str = "RPP berhasil diunduh!";
pub const MSG_DOWNLOADED_PDF: &str = "RPP berhasil diunduh sebagai PDF!";
pub const MSG_PDF_FAILED: &str = "Gagal membuat PDF, coba download sebagai text";
pub const MSG_DOWNLOAD_FAILED: &str = "Gagal mengunduh RPP";
pub const MSG_RESET: &str = "Form berhasil direset!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Input,
    Generating,
    Preview,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    UpdateField(Field, String),
    SelectTemplate(crate::rpp::templates::TemplateId),
    Submit,
    GenerationSucceeded(String),
    GenerationFailed,
    StartEdit,
    EditText(String),
    SaveEdit,
    CancelEdit,
    Copy,
    ClipboardWritten { ok: bool },
    Download(ExportFormat),
    DownloadFinished { format: ExportFormat, ok: bool },
    Reset,
}

/// Work the client must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `POST /api/generate-rpp` with this body.
    SendGeneration(LessonPlanRequest),
    CopyToClipboard(String),
    /// Export through `POST /api/export-rpp` (or a local equivalent).
    Export(ExportRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    fn success(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    fn error(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: Session,
    pub effect: Option<Effect>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub phase: Phase,
    pub form: FormState,
    /// Last generated or saved document. Empty until the first success.
    pub result: String,
    /// Mutable copy of `result` while editing.
    pub edit_buffer: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text copy and download act on: the edit buffer while editing, otherwise the result.
    pub fn current_text(&self) -> &str {
        match self.phase {
            Phase::Editing => &self.edit_buffer,
            _ => &self.result,
        }
    }

    pub fn apply(self, event: Event) -> Transition {
        let mut session = self;

        match (session.phase, event) {
            (Phase::Input, Event::UpdateField(field, value)) => {
                session.form.set(field, value);
                session.stay()
            }
            (Phase::Input, Event::SelectTemplate(template)) => {
                session.form.template = template;
                session.stay()
            }
            (Phase::Input, Event::Submit) => {
                if !session.form.is_complete() {
                    return session.notify(Notice::error(MSG_INCOMPLETE_FORM));
                }
                let request = session.form.to_request();
                session.phase = Phase::Generating;
                Transition {
                    session,
                    effect: Some(Effect::SendGeneration(request)),
                    notice: None,
                }
            }
            (Phase::Generating, Event::GenerationSucceeded(text)) => {
                session.edit_buffer = text.clone();
                session.result = text;
                session.phase = Phase::Preview;
                session.notify(Notice::success(MSG_GENERATED))
            }
            (Phase::Generating, Event::GenerationFailed) => {
                session.phase = Phase::Input;
                session.notify(Notice::error(MSG_GENERATION_FAILED))
            }
            (Phase::Preview, Event::StartEdit) => {
                session.edit_buffer = session.result.clone();
                session.phase = Phase::Editing;
                session.stay()
            }
            (Phase::Editing, Event::EditText(text)) => {
                session.edit_buffer = text;
                session.stay()
            }
            (Phase::Editing, Event::SaveEdit) => {
                session.result = session.edit_buffer.clone();
                session.phase = Phase::Preview;
                session.notify(Notice::success(MSG_SAVED))
            }
            (Phase::Editing, Event::CancelEdit) => {
                session.edit_buffer = session.result.clone();
                session.phase = Phase::Preview;
                session.stay()
            }
            (Phase::Preview | Phase::Editing, Event::Copy) => {
                if session.current_text().is_empty() {
                    return session.stay();
                }
                let text = session.current_text().to_string();
                Transition {
                    session,
                    effect: Some(Effect::CopyToClipboard(text)),
                    notice: None,
                }
            }
            (Phase::Preview | Phase::Editing, Event::ClipboardWritten { ok }) => {
                if ok {
                    session.notify(Notice::success(MSG_COPIED))
                } else {
                    session.notify(Notice::error(MSG_COPY_FAILED))
                }
            }
            (Phase::Preview | Phase::Editing, Event::Download(format)) => {
                if session.current_text().is_empty() {
                    return session.stay();
                }
                let request = ExportRequest {
                    format,
                    rpp: session.current_text().to_string(),
                    metadata: session.form.export_metadata(),
                };
                Transition {
                    session,
                    effect: Some(Effect::Export(request)),
                    notice: None,
                }
            }
            (Phase::Preview | Phase::Editing, Event::DownloadFinished { format, ok }) => {
                let notice = match (format, ok) {
                    (ExportFormat::Txt, true) => Notice::success(MSG_DOWNLOADED_TXT),
                    (ExportFormat::Layout, true) => Notice::success(MSG_DOWNLOADED_PDF),
                    (ExportFormat::Layout, false) => Notice::error(MSG_PDF_FAILED),
                    (ExportFormat::Txt, false) => Notice::error(MSG_DOWNLOAD_FAILED),
                };
                session.notify(notice)
            }
            (Phase::Input | Phase::Preview | Phase::Editing, Event::Reset) => {
                Session::new().notify(Notice::success(MSG_RESET))
            }
            // Includes Submit while Generating: one request in flight at most.
            _ => session.stay(),
        }
    }

    fn stay(self) -> Transition {
        Transition {
            session: self,
            effect: None,
            notice: None,
        }
    }

    fn notify(self, notice: Notice) -> Transition {
        Transition {
            session: self,
            effect: None,
            notice: Some(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpp::templates::TemplateId;

    fn filled_session() -> Session {
        let events = [
            Event::UpdateField(Field::TeacherName, "Budi, S.Pd.".to_string()),
            Event::UpdateField(Field::SchoolName, "SDN 1 Maju".to_string()),
            Event::UpdateField(Field::Subject, "Matematika".to_string()),
            Event::UpdateField(Field::GradeLevel, "4".to_string()),
            Event::UpdateField(Field::Topic, "Pecahan".to_string()),
        ];
        events
            .into_iter()
            .fold(Session::new(), |s, e| s.apply(e).session)
    }

    fn previewing(text: &str) -> Session {
        let generating = filled_session().apply(Event::Submit).session;
        generating
            .apply(Event::GenerationSucceeded(text.to_string()))
            .session
    }

    #[test]
    fn test_submit_incomplete_form_stays_in_input_with_error() {
        let t = Session::new().apply(Event::Submit);
        assert_eq!(t.session.phase, Phase::Input);
        assert!(t.effect.is_none());
        assert_eq!(t.notice, Some(Notice::error(MSG_INCOMPLETE_FORM)));
    }

    #[test]
    fn test_submit_complete_form_sends_request() {
        let t = filled_session().apply(Event::Submit);
        assert_eq!(t.session.phase, Phase::Generating);
        match t.effect {
            Some(Effect::SendGeneration(request)) => {
                assert_eq!(request.topic, "Pecahan");
                assert_eq!(request.template_id.as_deref(), Some("kurikulum_merdeka"));
            }
            other => panic!("expected SendGeneration, got {other:?}"),
        }
    }

    #[test]
    fn test_second_submit_while_generating_is_ignored() {
        let generating = filled_session().apply(Event::Submit).session;
        let t = generating.clone().apply(Event::Submit);
        assert_eq!(t.session, generating);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_form_is_locked_while_generating() {
        let generating = filled_session().apply(Event::Submit).session;
        let t = generating
            .clone()
            .apply(Event::UpdateField(Field::Topic, "Lain".to_string()));
        assert_eq!(t.session.form.topic, "Pecahan");
    }

    #[test]
    fn test_success_moves_to_preview() {
        let session = previewing("RPP asli");
        assert_eq!(session.phase, Phase::Preview);
        assert_eq!(session.result, "RPP asli");
        assert_eq!(session.current_text(), "RPP asli");
    }

    #[test]
    fn test_failure_returns_to_input_with_form_intact() {
        let generating = filled_session().apply(Event::Submit).session;
        let t = generating.apply(Event::GenerationFailed);
        assert_eq!(t.session.phase, Phase::Input);
        assert_eq!(t.session.form.teacher_name, "Budi, S.Pd.");
        assert_eq!(t.notice, Some(Notice::error(MSG_GENERATION_FAILED)));
        assert!(t.session.form.is_complete(), "user can resubmit");
    }

    #[test]
    fn test_edit_then_save_replaces_result_exactly() {
        let editing = previewing("RPP asli").apply(Event::StartEdit).session;
        assert_eq!(editing.phase, Phase::Editing);
        assert_eq!(editing.edit_buffer, "RPP asli");

        let edited = "RPP asli\n\n**Catatan guru:** tambah kuis  ";
        let t = editing
            .apply(Event::EditText(edited.to_string()))
            .session
            .apply(Event::SaveEdit);
        assert_eq!(t.session.phase, Phase::Preview);
        assert_eq!(t.session.result, edited);
        assert_eq!(t.notice, Some(Notice::success(MSG_SAVED)));
    }

    #[test]
    fn test_edit_then_cancel_restores_original() {
        let t = previewing("RPP asli")
            .apply(Event::StartEdit)
            .session
            .apply(Event::EditText("dibuang".to_string()))
            .session
            .apply(Event::CancelEdit);
        assert_eq!(t.session.phase, Phase::Preview);
        assert_eq!(t.session.result, "RPP asli");
        assert_eq!(t.session.edit_buffer, "RPP asli");
    }

    #[test]
    fn test_copy_uses_edit_buffer_while_editing() {
        let editing = previewing("RPP asli")
            .apply(Event::StartEdit)
            .session
            .apply(Event::EditText("RPP draf".to_string()))
            .session;
        let t = editing.apply(Event::Copy);
        assert_eq!(t.effect, Some(Effect::CopyToClipboard("RPP draf".to_string())));
    }

    #[test]
    fn test_clipboard_failure_only_notifies() {
        let preview = previewing("RPP asli");
        let t = preview.clone().apply(Event::ClipboardWritten { ok: false });
        assert_eq!(t.session, preview);
        assert_eq!(t.notice, Some(Notice::error(MSG_COPY_FAILED)));
    }

    #[test]
    fn test_download_builds_export_from_form_fields() {
        let t = previewing("RPP asli").apply(Event::Download(ExportFormat::Txt));
        match t.effect {
            Some(Effect::Export(request)) => {
                assert_eq!(request.format, ExportFormat::Txt);
                assert_eq!(request.rpp, "RPP asli");
                assert_eq!(
                    request.metadata.filename(request.format),
                    "RPP_Matematika_4_Pecahan.txt"
                );
            }
            other => panic!("expected Export, got {other:?}"),
        }
    }

    #[test]
    fn test_download_finished_notices() {
        let preview = previewing("RPP asli");
        let pdf_failed = preview.clone().apply(Event::DownloadFinished {
            format: ExportFormat::Layout,
            ok: false,
        });
        assert_eq!(pdf_failed.notice, Some(Notice::error(MSG_PDF_FAILED)));

        let txt_ok = preview.apply(Event::DownloadFinished {
            format: ExportFormat::Txt,
            ok: true,
        });
        assert_eq!(txt_ok.notice, Some(Notice::success(MSG_DOWNLOADED_TXT)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut editing = previewing("RPP asli").apply(Event::StartEdit).session;
        editing.form.template = TemplateId::Stem;
        let t = editing.apply(Event::Reset);
        assert_eq!(t.session, Session::new());
        assert_eq!(t.session.form.template, TemplateId::KurikulumMerdeka);
        assert_eq!(t.notice, Some(Notice::success(MSG_RESET)));
    }

    #[test]
    fn test_reset_is_ignored_while_generating() {
        let generating = filled_session().apply(Event::Submit).session;
        let t = generating.clone().apply(Event::Reset);
        assert_eq!(t.session, generating);
    }

    #[test]
    fn test_nothing_to_copy_before_generation() {
        let t = filled_session().apply(Event::Copy);
        assert!(t.effect.is_none());
    }
}
