//! Client state controller: a local copy of the item collection kept in
//! sync with the server.
//!
//! # Design
//! `ItemsController` holds the three pieces of UI state: the local `items`
//! copy, the id currently in edit mode, and the last user-visible error.
//! Every mutating action follows the same protocol: issue the mutating
//! request, and on success re-fetch the whole list and replace `items`
//! wholesale. Consistency is favored over round-trip count — there is no
//! optimistic local patching, so the display only ever shows what the
//! server confirmed. On failure the error message is surfaced and `items`
//! is left as-is (stale but displayed).
//!
//! All IO goes through the [`Transport`] passed into each call, so the full
//! protocol is exercised in tests with a scripted transport.

use crate::api::ItemsApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Item, ItemInput};

pub struct ItemsController {
    api: ItemsApi,
    items: Vec<Item>,
    editing_id: Option<u64>,
    error: Option<String>,
}

impl ItemsController {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: ItemsApi::new(base_url),
            items: Vec::new(),
            editing_id: None,
            error: None,
        }
    }

    /// The local copy of the collection, as of the last successful fetch.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The id currently in edit mode, if any. At most one at a time.
    pub fn editing_id(&self) -> Option<u64> {
        self.editing_id
    }

    /// The last user-visible error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Initial load. On failure `items` stays empty and the error is
    /// surfaced. Returns whether the load succeeded.
    pub fn load(&mut self, transport: &impl Transport) -> bool {
        self.finish(self.sync(transport), false)
    }

    /// Create an item, then re-fetch the list.
    pub fn add_item(&mut self, transport: &impl Transport, input: &ItemInput) -> bool {
        let outcome = self.api.build_create_item(input).and_then(|req| {
            self.api.parse_create_item(transport.execute(req)?)?;
            self.sync(transport)
        });
        self.finish(outcome, false)
    }

    /// Enter edit mode for `id`. Exclusive: any previously edited item
    /// silently leaves edit mode.
    pub fn begin_edit(&mut self, id: u64) {
        self.editing_id = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// Fetch a single item, typically to prefill the edit form. On failure
    /// the error is surfaced and `None` is returned.
    pub fn fetch_item(&mut self, transport: &impl Transport, id: u64) -> Option<Item> {
        let req = self.api.build_get_item(id);
        match transport
            .execute(req)
            .and_then(|response| self.api.parse_get_item(response))
        {
            Ok(item) => {
                self.error = None;
                Some(item)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Apply `input` to the item currently in edit mode, then re-fetch the
    /// list. Edit mode ends only on success; a failed save keeps the form
    /// open with the error displayed.
    pub fn save_edit(&mut self, transport: &impl Transport, input: &ItemInput) -> bool {
        let Some(id) = self.editing_id else {
            self.error = Some("no item is being edited".to_string());
            return false;
        };
        let outcome = self.api.build_update_item(id, input).and_then(|req| {
            self.api.parse_update_item(transport.execute(req)?)?;
            self.sync(transport)
        });
        self.finish(outcome, true)
    }

    /// Delete `id`, then re-fetch the list. A 404 surfaces as an error and
    /// the item stays in the local display until a fresh fetch confirms its
    /// absence. Callers confirm with the user before invoking this.
    pub fn delete_item(&mut self, transport: &impl Transport, id: u64) -> bool {
        let req = self.api.build_delete_item(id);
        let outcome = transport.execute(req).and_then(|response| {
            self.api.parse_delete_item(response)?;
            self.sync(transport)
        });
        self.finish(outcome, false)
    }

    fn sync(&self, transport: &impl Transport) -> Result<Vec<Item>, ApiError> {
        let req = self.api.build_list_items();
        self.api.parse_list_items(transport.execute(req)?)
    }

    /// Commit the outcome of an action: replace `items` (and, for edit
    /// saves, end edit mode) on success; surface the error and touch
    /// nothing else on failure.
    fn finish(&mut self, outcome: Result<Vec<Item>, ApiError>, end_edit: bool) -> bool {
        match outcome {
            Ok(items) => {
                self.items = items;
                if end_edit {
                    self.editing_id = None;
                }
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted transport: hands out canned responses in order and records
    /// every request it sees.
    struct FakeTransport {
        responses: RefCell<VecDeque<HttpResponse>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn new(responses: Vec<(u16, &str)>) -> Self {
            Self {
                responses: RefCell::new(
                    responses
                        .into_iter()
                        .map(|(status, body)| HttpResponse {
                            status,
                            body: body.to_string(),
                        })
                        .collect(),
                ),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<(HttpMethod, String)> {
            self.requests
                .borrow()
                .iter()
                .map(|req| (req.method.clone(), req.url.clone()))
                .collect()
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Transport("connection refused".to_string()))
        }
    }

    const SEED: &str = r#"[{"id":1,"name":"First Item","description":"This is the first item."},{"id":2,"name":"Second Item"}]"#;
    const WITH_THIRD: &str = r#"[{"id":1,"name":"First Item","description":"This is the first item."},{"id":2,"name":"Second Item"},{"id":3,"name":"Third"}]"#;

    fn controller() -> ItemsController {
        ItemsController::new("http://localhost:3000")
    }

    #[test]
    fn load_replaces_items() {
        let transport = FakeTransport::new(vec![(200, SEED)]);
        let mut ctl = controller();
        assert!(ctl.load(&transport));
        assert_eq!(ctl.items().len(), 2);
        assert!(ctl.error().is_none());
    }

    #[test]
    fn load_failure_leaves_items_empty_and_surfaces_error() {
        let transport = FakeTransport::new(vec![]);
        let mut ctl = controller();
        assert!(!ctl.load(&transport));
        assert!(ctl.items().is_empty());
        assert_eq!(ctl.error(), Some("network error: connection refused"));
    }

    #[test]
    fn add_item_posts_then_refetches() {
        let transport = FakeTransport::new(vec![
            (201, r#"{"id":3,"name":"Third"}"#),
            (200, WITH_THIRD),
        ]);
        let mut ctl = controller();
        assert!(ctl.add_item(&transport, &ItemInput::new("Third", None)));

        assert_eq!(
            transport.seen(),
            vec![
                (HttpMethod::Post, "http://localhost:3000/items".to_string()),
                (HttpMethod::Get, "http://localhost:3000/items".to_string()),
            ]
        );
        assert_eq!(ctl.items().len(), 3);
        assert_eq!(ctl.items()[2].id, 3);
    }

    #[test]
    fn failed_add_leaves_items_untouched_and_shows_envelope_message() {
        let transport = FakeTransport::new(vec![(200, SEED), (400, r#"{"error":"Failed to create item"}"#)]);
        let mut ctl = controller();
        ctl.load(&transport);

        assert!(!ctl.add_item(&transport, &ItemInput::new("Third", None)));
        assert_eq!(ctl.error(), Some("Failed to create item"));
        // no refetch after the failed mutation, and the stale list stays up
        assert_eq!(transport.seen().len(), 2);
        assert_eq!(ctl.items().len(), 2);
    }

    #[test]
    fn delete_of_missing_item_keeps_it_displayed() {
        let transport = FakeTransport::new(vec![(200, SEED), (404, r#"{"error":"Item not found"}"#)]);
        let mut ctl = controller();
        ctl.load(&transport);

        assert!(!ctl.delete_item(&transport, 2));
        assert_eq!(ctl.error(), Some("Item not found"));
        assert_eq!(ctl.items().len(), 2, "item stays until a fresh fetch confirms");
    }

    #[test]
    fn delete_refetches_and_drops_the_item() {
        let transport = FakeTransport::new(vec![
            (200, WITH_THIRD),
            (200, r#"{"message":"Item deleted successfully"}"#),
            (200, SEED),
        ]);
        let mut ctl = controller();
        ctl.load(&transport);

        assert!(ctl.delete_item(&transport, 3));
        assert_eq!(ctl.items().len(), 2);
        assert!(ctl.error().is_none());
    }

    #[test]
    fn begin_edit_is_exclusive() {
        let mut ctl = controller();
        ctl.begin_edit(1);
        ctl.begin_edit(2);
        assert_eq!(ctl.editing_id(), Some(2));
        ctl.cancel_edit();
        assert_eq!(ctl.editing_id(), None);
    }

    #[test]
    fn save_edit_clears_editing_id_on_success() {
        let transport = FakeTransport::new(vec![
            (200, r#"{"id":2,"name":"Second, edited"}"#),
            (200, SEED),
        ]);
        let mut ctl = controller();
        ctl.begin_edit(2);

        assert!(ctl.save_edit(&transport, &ItemInput::new("Second, edited", None)));
        assert_eq!(ctl.editing_id(), None);
        assert_eq!(
            transport.seen(),
            vec![
                (HttpMethod::Put, "http://localhost:3000/items/2".to_string()),
                (HttpMethod::Get, "http://localhost:3000/items".to_string()),
            ]
        );
    }

    #[test]
    fn failed_save_keeps_edit_mode_open() {
        let transport = FakeTransport::new(vec![(404, r#"{"error":"Item not found"}"#)]);
        let mut ctl = controller();
        ctl.begin_edit(999);

        assert!(!ctl.save_edit(&transport, &ItemInput::new("X", None)));
        assert_eq!(ctl.editing_id(), Some(999));
        assert_eq!(ctl.error(), Some("Item not found"));
    }

    #[test]
    fn save_edit_without_edit_mode_issues_no_request() {
        let transport = FakeTransport::new(vec![]);
        let mut ctl = controller();

        assert!(!ctl.save_edit(&transport, &ItemInput::new("X", None)));
        assert!(transport.seen().is_empty());
        assert_eq!(ctl.error(), Some("no item is being edited"));
    }

    #[test]
    fn fetch_item_prefills_and_clears_error() {
        let transport = FakeTransport::new(vec![(200, r#"{"id":2,"name":"Second Item"}"#)]);
        let mut ctl = controller();

        let item = ctl.fetch_item(&transport, 2).unwrap();
        assert_eq!(item.name, "Second Item");
        assert!(ctl.error().is_none());
    }

    #[test]
    fn successful_action_clears_a_previous_error() {
        let transport = FakeTransport::new(vec![
            (404, r#"{"error":"Item not found"}"#),
            (200, r#"{"message":"Item deleted successfully"}"#),
            (200, SEED),
        ]);
        let mut ctl = controller();

        assert!(!ctl.delete_item(&transport, 999));
        assert!(ctl.error().is_some());
        assert!(ctl.delete_item(&transport, 3));
        assert!(ctl.error().is_none());
    }
}
