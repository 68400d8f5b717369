//! Scripted in-memory Lists service.
//!
//! Behaves like a cooperative server unless a [`Quirks`] flag makes it
//! deviate, so tests can check both passing and violated requirements.

use std::collections::BTreeMap;
use std::future::ready;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use listsws_core::config::Settings;
use listsws_core::types::{CheckinType, ListTemplate};
use listsws_proto::batch::{CommandKind, OnError, UpdateBatch};
use listsws_proto::caml::{Operator, QueryFilter};
use listsws_proto::rowset::column_name;
use listsws_proto::soap::{CallResult, SoapFault};
use listsws_proto::xml::{Namespace, XmlElement};
use listsws_suite::adapter::{AdapterFuture, ListItemsRequest, ListsAdapter};
use listsws_suite::context::TestContext;
use uuid::Uuid;

const SUCCESS: &str = "0x00000000";
const ITEM_MISSING: &str = "0x81020016";
const GENERIC_FAILURE: &str = "0x82000006";

/// Deviations from a cooperative server.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quirks {
    pub fail_delete: bool,
    pub check_in_when_not_checked_out: bool,
    pub accept_stale_check_out: bool,
    pub invalid_url_fault_without_string: bool,
    pub no_content_types: bool,
}

#[derive(Debug)]
struct MockItem {
    id: u32,
    fields: BTreeMap<String, String>,
    changed_at: u64,
}

#[derive(Debug)]
struct MockFile {
    last_modified: String,
    checked_out: bool,
    check_ins: Vec<CheckinType>,
}

#[derive(Debug)]
struct MockList {
    id: Uuid,
    template: ListTemplate,
    items: Vec<MockItem>,
    files: BTreeMap<String, MockFile>,
}

#[derive(Debug, Default)]
struct State {
    lists: BTreeMap<String, MockList>,
    next_item_id: u32,
    change_seq: u64,
    delete_attempts: usize,
}

impl State {
    fn file_mut(&mut self, url: &str) -> Option<&mut MockFile> {
        self.lists
            .values_mut()
            .find_map(|list| list.files.get_mut(url))
    }
}

pub struct MockAdapter {
    state: Mutex<State>,
    quirks: Quirks,
}

impl MockAdapter {
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        Self {
            state: Mutex::new(State::default()),
            quirks,
        }
    }

    /// Locks the state and recovers from poisoning.
    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.state.clear_poison();
                poisoned.into_inner()
            }
        }
    }

    pub fn list_names(&self) -> Vec<String> {
        self.lock().lists.keys().cloned().collect()
    }

    pub fn delete_attempts(&self) -> usize {
        self.lock().delete_attempts
    }

    pub fn check_ins(&self, url: &str) -> Vec<CheckinType> {
        self.lock()
            .file_mut(url)
            .map(|file| file.check_ins.clone())
            .unwrap_or_default()
    }

    pub fn checked_out_files(&self) -> usize {
        self.lock()
            .lists
            .values()
            .flat_map(|list| list.files.values())
            .filter(|file| file.checked_out)
            .count()
    }

    pub fn is_checked_out(&self, url: &str) -> bool {
        self.lock().file_mut(url).is_some_and(|file| file.checked_out)
    }
}

/// Fault whose detail carries an error string followed by an error code.
pub fn fault(code: &str, message: &str) -> SoapFault {
    SoapFault::with_detail(
        XmlElement::new("detail")
            .with_child(XmlElement::new("errorstring").with_text(message))
            .with_child(XmlElement::new("errorcode").with_text(code)),
    )
}

fn code_only_fault(code: &str) -> SoapFault {
    SoapFault::with_detail(XmlElement::new("detail").with_child(XmlElement::new("errorcode").with_text(code)))
}

fn no_such_list(list_name: &str) -> SoapFault {
    fault(GENERIC_FAILURE, &format!("List '{list_name}' does not exist."))
}

fn row(item: &MockItem, only: Option<&[String]>) -> XmlElement {
    let mut row = XmlElement::namespaced(Namespace::ROWSET_ROW, Some("z"), "row")
        .with_attr(column_name("ID"), item.id.to_string());
    for (name, value) in &item.fields {
        if only.is_none_or(|names| names.contains(name)) {
            row.set_attr(column_name(name), value.as_str());
        }
    }
    row
}

fn matches(filter: &QueryFilter, item: &MockItem) -> bool {
    match filter {
        QueryFilter::Leaf(cmp) => {
            let actual = if cmp.field_name == "ID" {
                Some(item.id.to_string())
            } else {
                item.fields.get(&cmp.field_name).cloned()
            };
            match cmp.operator {
                Operator::Eq => actual.as_deref() == Some(cmp.value.as_str()),
                Operator::Neq => actual.as_deref() != Some(cmp.value.as_str()),
                Operator::Contains => actual.is_some_and(|v| v.contains(&cmp.value)),
                Operator::IsNull => actual.is_none(),
            }
        }
        QueryFilter::And(left, right) => matches(left, item) && matches(right, item),
        QueryFilter::Or(left, right) => matches(left, item) || matches(right, item),
    }
}

fn url_is_valid(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl MockAdapter {
    fn file_call(&self, url: &str, call: impl FnOnce(&mut MockFile) -> CallResult<bool>) -> CallResult<bool> {
        if !url_is_valid(url) {
            return Err(if self.quirks.invalid_url_fault_without_string {
                code_only_fault(GENERIC_FAILURE)
            } else {
                fault(
                    GENERIC_FAILURE,
                    "Invalid URI: The format of the URI could not be determined.",
                )
            });
        }
        let mut state = self.lock();
        let file = state
            .file_mut(url)
            .ok_or_else(|| fault(GENERIC_FAILURE, "File Not Found."))?;
        call(file)
    }

    fn apply_batch(&self, list_name: &str, batch: &UpdateBatch) -> CallResult<XmlElement> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let list = state
            .lists
            .get_mut(list_name)
            .ok_or_else(|| no_such_list(list_name))?;

        let mut results = XmlElement::new("Results");
        for (index, command) in batch.commands.iter().enumerate() {
            let result = XmlElement::new("Result").with_attr("ID", format!("{},{}", index + 1, command.kind));
            let fields = command
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()));

            let target = command
                .item_id
                .as_deref()
                .and_then(|id| list.items.iter().position(|item| item.id.to_string() == id));

            let reply = match (command.kind, target) {
                (CommandKind::New, _) => {
                    state.next_item_id += 1;
                    state.change_seq += 1;
                    let item = MockItem {
                        id: state.next_item_id,
                        fields: fields.collect(),
                        changed_at: state.change_seq,
                    };
                    let reply = Ok(row(&item, None));
                    list.items.push(item);
                    reply
                }
                (CommandKind::Update, Some(position)) => {
                    state.change_seq += 1;
                    let item = &mut list.items[position];
                    item.fields.extend(fields);
                    item.changed_at = state.change_seq;
                    Ok(row(item, None))
                }
                (CommandKind::Delete, Some(position)) => {
                    state.change_seq += 1;
                    let item = list.items.remove(position);
                    Ok(row(&item, None))
                }
                (_, None) => Err("Item does not exist. It may have been deleted by another user."),
            };

            match reply {
                Ok(written) => results.push_child(
                    result
                        .with_child(XmlElement::new("ErrorCode").with_text(SUCCESS))
                        .with_child(written),
                ),
                Err(text) => {
                    results.push_child(
                        result
                            .with_child(XmlElement::new("ErrorCode").with_text(ITEM_MISSING))
                            .with_child(XmlElement::new("ErrorText").with_text(text)),
                    );
                    if batch.on_error == OnError::Return {
                        break;
                    }
                }
            }
        }
        Ok(results)
    }
}

impl ListsAdapter for MockAdapter {
    fn add_list<'a>(
        &'a self,
        list_name: &'a str,
        _description: &'a str,
        template: ListTemplate,
    ) -> AdapterFuture<'a, XmlElement> {
        let mut state = self.lock();
        let result = if state.lists.contains_key(list_name) {
            Err(fault(GENERIC_FAILURE, "A list with that name already exists."))
        } else {
            let id = Uuid::new_v4();
            state.lists.insert(
                list_name.to_owned(),
                MockList {
                    id,
                    template,
                    items: Vec::new(),
                    files: BTreeMap::new(),
                },
            );
            Ok(XmlElement::new("List")
                .with_attr("ID", format!("{{{}}}", id.to_string().to_uppercase()))
                .with_attr("Title", list_name)
                .with_attr("ServerTemplate", template.id().to_string()))
        };
        Box::pin(ready(result))
    }

    fn delete_list<'a>(&'a self, list_name: &'a str) -> AdapterFuture<'a, ()> {
        let mut state = self.lock();
        state.delete_attempts += 1;
        let result = if self.quirks.fail_delete {
            Err(fault(GENERIC_FAILURE, "Access denied."))
        } else {
            state
                .lists
                .remove(list_name)
                .map(|_| ())
                .ok_or_else(|| no_such_list(list_name))
        };
        Box::pin(ready(result))
    }

    fn update_list_items<'a>(
        &'a self,
        list_name: &'a str,
        batch: &'a UpdateBatch,
    ) -> AdapterFuture<'a, XmlElement> {
        Box::pin(ready(self.apply_batch(list_name, batch)))
    }

    fn get_list_items<'a>(
        &'a self,
        list_name: &'a str,
        request: &'a ListItemsRequest,
    ) -> AdapterFuture<'a, XmlElement> {
        let state = self.lock();
        let result = state
            .lists
            .get(list_name)
            .map(|list| {
                let filter = request.query.as_ref().and_then(|q| q.filter.as_ref());
                let only = request.view_fields.as_ref().map(|v| v.field_names.as_slice());
                let rows: Vec<XmlElement> = list
                    .items
                    .iter()
                    .filter(|item| filter.is_none_or(|f| matches(f, item)))
                    .map(|item| row(item, only))
                    .collect();
                XmlElement::new("listitems").with_child(
                    XmlElement::namespaced(Namespace::ROWSET_DATA, Some("rs"), "data")
                        .with_attr("ItemCount", rows.len().to_string())
                        .with_children(rows),
                )
            })
            .ok_or_else(|| no_such_list(list_name));
        Box::pin(ready(result))
    }

    fn get_list_content_types<'a>(&'a self, list_name: &'a str) -> AdapterFuture<'a, XmlElement> {
        let state = self.lock();
        let result = state
            .lists
            .get(list_name)
            .map(|list| {
                let mut content_types = XmlElement::new("ContentTypes")
                    .with_attr("ContentTypeOrder", "0x01");
                if !self.quirks.no_content_types {
                    let (id, name) = match list.template {
                        ListTemplate::GenericList => ("0x01", "Item"),
                        ListTemplate::DocumentLibrary => ("0x0101", "Document"),
                    };
                    content_types.push_child(
                        XmlElement::new("ContentType")
                            .with_attr("ID", format!("{id}00{}", list.id.simple()))
                            .with_attr("Name", name),
                    );
                    content_types.push_child(
                        XmlElement::new("ContentType")
                            .with_attr("ID", "0x0120")
                            .with_attr("Name", "Folder")
                            .with_attr("Description", "Create a new folder."),
                    );
                }
                content_types
            })
            .ok_or_else(|| no_such_list(list_name));
        Box::pin(ready(result))
    }

    fn get_list_item_changes_since_token<'a>(
        &'a self,
        list_name: &'a str,
        change_token: Option<&'a str>,
    ) -> AdapterFuture<'a, XmlElement> {
        let state = self.lock();
        let since = change_token.and_then(|token| token.parse::<u64>().ok()).unwrap_or(0);
        let result = state
            .lists
            .get(list_name)
            .map(|list| {
                let rows: Vec<XmlElement> = list
                    .items
                    .iter()
                    .filter(|item| item.changed_at > since)
                    .map(|item| row(item, None))
                    .collect();
                XmlElement::new("listitems")
                    .with_child(
                        XmlElement::new("Changes")
                            .with_attr("LastChangeToken", state.change_seq.to_string()),
                    )
                    .with_child(
                        XmlElement::namespaced(Namespace::ROWSET_DATA, Some("rs"), "data")
                            .with_children(rows),
                    )
            })
            .ok_or_else(|| no_such_list(list_name));
        Box::pin(ready(result))
    }

    fn get_attachment_collection<'a>(
        &'a self,
        list_name: &'a str,
        item_id: &'a str,
    ) -> AdapterFuture<'a, XmlElement> {
        let state = self.lock();
        let result = match state.lists.get(list_name) {
            None => Err(no_such_list(list_name)),
            Some(list) if list.items.iter().any(|item| item.id.to_string() == item_id) => {
                Ok(XmlElement::new("Attachments"))
            }
            Some(_) => Err(fault(ITEM_MISSING, "Item does not exist.")),
        };
        Box::pin(ready(result))
    }

    fn upload_file<'a>(
        &'a self,
        list_name: &'a str,
        file_name: &'a str,
        _content: &'a [u8],
    ) -> AdapterFuture<'a, String> {
        let mut state = self.lock();
        let result = match state.lists.get_mut(list_name) {
            Some(list) if list.template == ListTemplate::DocumentLibrary => {
                let url = format!("http://mock.test/{list_name}/{file_name}");
                list.files.insert(
                    url.clone(),
                    MockFile {
                        last_modified: Utc::now().format("%d %b %Y %H:%M:%S GMT").to_string(),
                        checked_out: false,
                        check_ins: Vec::new(),
                    },
                );
                Ok(url)
            }
            Some(_) => Err(fault(GENERIC_FAILURE, "Not a document library.")),
            None => Err(no_such_list(list_name)),
        };
        Box::pin(ready(result))
    }

    fn check_out_file<'a>(
        &'a self,
        page_url: &'a str,
        _check_out_to_local: bool,
        last_modified: Option<&'a str>,
    ) -> AdapterFuture<'a, bool> {
        let accept_stale = self.quirks.accept_stale_check_out;
        let result = self.file_call(page_url, |file| {
            let stale = last_modified.is_some_and(|stamp| stamp != file.last_modified);
            if file.checked_out || (stale && !accept_stale) {
                return Ok(false);
            }
            file.checked_out = true;
            Ok(true)
        });
        Box::pin(ready(result))
    }

    fn check_in_file<'a>(
        &'a self,
        page_url: &'a str,
        _comment: &'a str,
        checkin_type: CheckinType,
    ) -> AdapterFuture<'a, bool> {
        let lenient = self.quirks.check_in_when_not_checked_out;
        let result = self.file_call(page_url, |file| {
            if !file.checked_out && !lenient {
                return Err(fault(GENERIC_FAILURE, "The file is not checked out."));
            }
            file.checked_out = false;
            file.check_ins.push(checkin_type);
            Ok(true)
        });
        Box::pin(ready(result))
    }

    fn undo_check_out<'a>(&'a self, page_url: &'a str) -> AdapterFuture<'a, bool> {
        let result = self.file_call(page_url, |file| {
            let was_checked_out = file.checked_out;
            file.checked_out = false;
            Ok(was_checked_out)
        });
        Box::pin(ready(result))
    }
}

pub fn settings(toml: &str) -> Settings {
    Settings::from_toml(toml).expect("valid test settings")
}

pub fn context(adapter: MockAdapter) -> TestContext<MockAdapter> {
    TestContext::new(adapter, settings(""))
}
