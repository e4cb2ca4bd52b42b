//! World news and the interview review queue.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "pending",
            InterviewStatus::Approved => "approved",
            InterviewStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "Pendente",
            InterviewStatus::Approved => "Aprovada",
            InterviewStatus::Rejected => "Rejeitada",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub title: String,
    pub content: String,
    /// User id of the submitting player.
    pub author: String,
    pub character_name: String,
    pub date: NaiveDate,
    pub status: InterviewStatus,
}

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::EmptyField(field));
    }
    Ok(())
}

/// Published news, newest first.
#[derive(Debug, Clone, Default)]
pub struct NewsBoard {
    items: Vec<News>,
}

impl NewsBoard {
    pub fn new(items: Vec<News>) -> Self {
        Self { items }
    }

    pub fn publish(
        &mut self,
        title: &str,
        content: &str,
        author: &str,
        date: NaiveDate,
    ) -> Result<&News> {
        require(title, "title")?;
        require(content, "content")?;

        let news = News {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            date,
        };
        tracing::info!(id = %news.id, author, "news published");
        self.items.insert(0, news);
        Ok(&self.items[0])
    }

    pub fn edit(&mut self, id: &str, title: &str, content: &str) -> Result<()> {
        require(title, "title")?;
        require(content, "content")?;

        let news = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NewsNotFound(id.to_string()))?;
        news.title = title.to_string();
        news.content = content.to_string();
        tracing::debug!(id, "news edited");
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<News> {
        let index = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| Error::NewsNotFound(id.to_string()))?;
        tracing::info!(id, "news removed");
        Ok(self.items.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&News> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn latest(&self, n: usize) -> &[News] {
        &self.items[..n.min(self.items.len())]
    }

    pub fn all(&self) -> &[News] {
        &self.items
    }
}

/// Interviews awaiting or past review.
#[derive(Debug, Clone, Default)]
pub struct InterviewDesk {
    items: Vec<Interview>,
}

impl InterviewDesk {
    pub fn new(items: Vec<Interview>) -> Self {
        Self { items }
    }

    /// Files a new interview as pending review.
    pub fn submit(
        &mut self,
        title: &str,
        content: &str,
        author: &str,
        character_name: &str,
        date: NaiveDate,
    ) -> Result<&Interview> {
        require(title, "title")?;
        require(content, "content")?;

        let interview = Interview {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            character_name: character_name.to_string(),
            date,
            status: InterviewStatus::Pending,
        };
        tracing::info!(id = %interview.id, author, "interview submitted");
        self.items.insert(0, interview);
        Ok(&self.items[0])
    }

    pub fn approve(&mut self, id: &str) -> Result<()> {
        self.review(id, InterviewStatus::Approved)
    }

    pub fn reject(&mut self, id: &str) -> Result<()> {
        self.review(id, InterviewStatus::Rejected)
    }

    // Only pending interviews can be reviewed.
    fn review(&mut self, id: &str, to: InterviewStatus) -> Result<()> {
        let interview = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::InterviewNotFound(id.to_string()))?;

        if interview.status != InterviewStatus::Pending {
            return Err(Error::InvalidTransition {
                id: id.to_string(),
                from: interview.status.as_str(),
                to: to.as_str(),
            });
        }
        interview.status = to;
        tracing::info!(id, status = to.as_str(), "interview reviewed");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Interview> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn with_status(&self, status: InterviewStatus) -> Vec<&Interview> {
        self.items.iter().filter(|i| i.status == status).collect()
    }

    pub fn pending(&self) -> Vec<&Interview> {
        self.with_status(InterviewStatus::Pending)
    }

    pub fn approved(&self) -> Vec<&Interview> {
        self.with_status(InterviewStatus::Approved)
    }

    pub fn by_author(&self, user_id: &str) -> Vec<&Interview> {
        self.items.iter().filter(|i| i.author == user_id).collect()
    }

    pub fn all(&self) -> &[Interview] {
        &self.items
    }
}
