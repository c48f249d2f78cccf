//! Input collector: the editable lesson-plan form.

use crate::export::ExportMetadata;
use crate::rpp::models::LessonPlanRequest;
use crate::rpp::templates::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TeacherName,
    SchoolName,
    Subject,
    GradeLevel,
    Topic,
    TimeAllocation,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub teacher_name: String,
    pub school_name: String,
    pub subject: String,
    pub grade_level: String,
    pub topic: String,
    pub time_allocation: String,
    pub template: TemplateId,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::TeacherName => &mut self.teacher_name,
            Field::SchoolName => &mut self.school_name,
            Field::Subject => &mut self.subject,
            Field::GradeLevel => &mut self.grade_level,
            Field::Topic => &mut self.topic,
            Field::TimeAllocation => &mut self.time_allocation,
        };
        *slot = value;
    }

    /// The request body sent to `POST /api/generate-rpp`.
    pub fn to_request(&self) -> LessonPlanRequest {
        LessonPlanRequest {
            teacher_name: self.teacher_name.clone(),
            school_name: self.school_name.clone(),
            subject: self.subject.clone(),
            grade_level: self.grade_level.clone(),
            topic: self.topic.clone(),
            time_allocation: Some(self.time_allocation.clone()),
            template_id: Some(self.template.descriptor().key.to_string()),
        }
    }

    /// True when every required field has content.
    pub fn is_complete(&self) -> bool {
        self.to_request().missing_fields().is_empty()
    }

    pub fn export_metadata(&self) -> ExportMetadata {
        ExportMetadata {
            subject: self.subject.clone(),
            grade_level: self.grade_level.clone(),
            topic: self.topic.clone(),
            time_allocation: Some(self.time_allocation.clone()),
        }
    }
}
