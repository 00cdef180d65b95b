// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Repository, VcsError};
use rp_core::CommitId;
use std::collections::VecDeque;

/// Commits fetched per `log` call.
const PAGE_SIZE: usize = 64;

/// Lazy newest-first cursor over the history of one commit.
///
/// Pages through [`Repository::log`] on demand and never fetches more
/// than `limit` commits in total.
pub struct CommitWalk<'a, R: ?Sized> {
    repo: &'a R,
    head: CommitId,
    limit: usize,
    fetched: usize,
    page: VecDeque<CommitId>,
    exhausted: bool,
}

impl<'a, R: Repository + ?Sized> CommitWalk<'a, R> {
    pub fn new(repo: &'a R, head: CommitId, limit: usize) -> Self {
        Self { repo, head, limit, fetched: 0, page: VecDeque::new(), exhausted: limit == 0 }
    }

    pub async fn next(&mut self) -> Result<Option<CommitId>, VcsError> {
        if self.page.is_empty() && !self.exhausted {
            let want = PAGE_SIZE.min(self.limit - self.fetched);
            let page = self.repo.log(&self.head, self.fetched, want).await?;
            self.fetched += page.len();
            if page.len() < want || self.fetched >= self.limit {
                self.exhausted = true;
            }
            self.page.extend(page);
        }
        Ok(self.page.pop_front())
    }

    /// Commits handed out or buffered so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
