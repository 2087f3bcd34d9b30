//! Editable-form codec.
//!
//! An issue's editable fields travel through the user's editor as a block of
//! five labeled lines:
//!
//! ```text
//! Title: <title>
//! Body: <body, may span lines>
//! Milestone: <milestone>
//! Labels: <comma separated>
//! Assignees: <comma separated>
//! ```
//!
//! Segments are delimited by the next label at the start of a line, so a
//! title cannot contain a line starting with `Body:` and a body cannot contain
//! a line starting with `Milestone:`. Milestone, Labels and Assignees are
//! single-line values.
//!
//! Title, Body and Milestone are kept verbatim after the one space following
//! the label; whitespace only decides whether a Title or Milestone is blank.
//! Labels and Assignees items are trimmed and empty items dropped.

mod error;

pub use error::{FormError, Result};

use crate::github::{Issue, IssueRequest};

/// The five fields of the form, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
    Milestone,
    Labels,
    Assignees,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Body,
        Field::Milestone,
        Field::Labels,
        Field::Assignees,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Body => "Body",
            Field::Milestone => "Milestone",
            Field::Labels => "Labels",
            Field::Assignees => "Assignees",
        }
    }

    fn is_single_line(self) -> bool {
        matches!(self, Field::Milestone | Field::Labels | Field::Assignees)
    }
}

/// Denormalized, all-string view of an issue's editable fields.
///
/// `Default` is the blank form used for `create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableForm {
    pub title: String,
    pub body: String,
    pub milestone: String,
    /// Comma-joined label names.
    pub labels: String,
    /// Comma-joined assignee logins.
    pub assignees: String,
}

impl EditableForm {
    /// Pre-fill a form from an existing issue.
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            title: issue.title.clone(),
            body: issue.body.clone().unwrap_or_default(),
            milestone: issue
                .milestone
                .as_ref()
                .map(|m| m.number.to_string())
                .unwrap_or_default(),
            labels: issue.label_names().join(","),
            assignees: issue.assignee_logins().join(","),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
            Field::Milestone => &self.milestone,
            Field::Labels => &self.labels,
            Field::Assignees => &self.assignees,
        }
    }

    /// Render the form as exactly five `Label: value` lines.
    ///
    /// # Examples
    /// ```
    /// use issuectl::form::EditableForm;
    /// let text = EditableForm::default().render();
    /// assert_eq!(text, "Title: \nBody: \nMilestone: \nLabels: \nAssignees: \n");
    /// ```
    pub fn render(&self) -> String {
        Field::ALL
            .iter()
            .map(|&field| format!("{}: {}\n", field.label(), self.get(field)))
            .collect()
    }
}

/// Parse an edited form back into a request.
///
/// Fails with [`FormError::Malformed`] when the text does not have the
/// five-field shape, and with [`FormError::EmptyTitle`] when the title is
/// blank.
pub fn parse(text: &str) -> Result<IssueRequest> {
    let text = text.replace("\r\n", "\n");
    let [title, body, milestone, labels, assignees] = split_fields(&text)?;

    if title.trim().is_empty() {
        return Err(FormError::EmptyTitle);
    }

    Ok(IssueRequest {
        title: title.to_string(),
        body: body.to_string(),
        milestone: (!milestone.trim().is_empty()).then(|| milestone.to_string()),
        labels: split_list(labels),
        assignees: split_list(assignees),
    })
}

/// Split the text into the five field values, in `Field::ALL` order.
fn split_fields(text: &str) -> Result<[&str; 5]> {
    let mut values = [""; 5];

    let mut rest = strip_label(text, Field::Title.label()).ok_or_else(|| {
        FormError::Malformed("the first line must start with `Title:`".to_string())
    })?;

    for (i, &field) in Field::ALL.iter().enumerate().skip(1) {
        let marker = format!("\n{}:", field.label());
        let (value, tail) = rest.split_once(&marker).ok_or_else(|| {
            FormError::Malformed(format!("missing `{}:` line", field.label()))
        })?;
        values[i - 1] = value;
        rest = tail.strip_prefix(' ').unwrap_or(tail);
    }
    // The last line's newline is optional; editors differ.
    values[4] = rest.trim_end_matches('\n');

    for (&field, value) in Field::ALL.iter().zip(values.iter()) {
        if field.is_single_line() && value.contains('\n') {
            return Err(FormError::Malformed(format!(
                "`{}` must be a single line",
                field.label()
            )));
        }
    }

    Ok(values)
}

fn strip_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(label)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Split a comma-joined value; an empty value yields `None`, not an empty list.
fn split_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    (!items.is_empty()).then_some(items)
}
