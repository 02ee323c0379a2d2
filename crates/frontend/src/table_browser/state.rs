//! Table Browser state machine
//!
//! Pure state: nothing here touches the network or the DOM. The view model
//! asks for tickets (`begin_load`, `begin_refresh`), runs the requests and
//! hands the responses back through `apply_*`. Each slice (schema, data)
//! keeps its own generation counter; a response whose ticket is no longer
//! the latest for its slice is dropped.

use contracts::admin::endpoints::DataPageQuery;
use contracts::admin::schema::{form_columns, header_columns};
use contracts::admin::{ColumnDescriptor, EditBuffer, FieldRenames, Record, RecordId, TableSchema};
use contracts::shared::{ApiResponse, Pagination, TablePage};
use serde_json::Value;

pub const SCHEMA_FALLBACK: &str = "Failed to load table schema";
pub const DATA_FALLBACK: &str = "Failed to load table data";
pub const RECORD_FALLBACK: &str = "Failed to load record";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTicket(u64);

/// Requests to issue for a full (non-silent) load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub table: String,
    pub schema: SchemaTicket,
    pub data: DataTicket,
    pub query: DataPageQuery,
}

/// Result of handing a response back to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A newer request for the same slice was issued; nothing changed.
    Stale,
    Ok,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update(RecordId),
    Delete(RecordId),
}

impl MutationKind {
    pub fn success_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Record created successfully!",
            MutationKind::Update(_) => "Record updated successfully!",
            MutationKind::Delete(_) => "Record deleted successfully!",
        }
    }

    pub fn failure_fallback(&self) -> &'static str {
        match self {
            MutationKind::Create => "Failed to create record",
            MutationKind::Update(_) => "Failed to update record",
            MutationKind::Delete(_) => "Failed to delete record",
        }
    }
}

/// A create/update/delete ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRequest {
    pub kind: MutationKind,
    pub table: String,
    /// Normalized body. Empty for deletes.
    pub body: Record,
    /// Page and search active at submit time; reloaded once on success.
    pub reload: DataPageQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub notice: Notice,
    pub reload: Option<DataPageQuery>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub id: RecordId,
    pub buffer: EditBuffer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordView {
    Loading(RecordId),
    Loaded(RecordId, Record),
    Failed(RecordId, String),
}

impl RecordView {
    pub fn id(&self) -> &RecordId {
        match self {
            RecordView::Loading(id) | RecordView::Loaded(id, _) | RecordView::Failed(id, _) => id,
        }
    }
}

/// Which form a field edit goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBrowserState {
    pub table: String,
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Record>,
    pub pagination: Pagination,
    /// Requested page, 1-based.
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,

    pub create_open: bool,
    pub create_buffer: EditBuffer,
    pub edit: Option<EditTarget>,
    pub viewing: Option<RecordView>,

    schema_generation: u64,
    data_generation: u64,
}

impl TableBrowserState {
    pub fn new(table: impl Into<String>, limit: u32) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            pagination: Pagination::default(),
            page: 1,
            limit,
            search: String::new(),
            loading: true,
            error: None,
            create_open: false,
            create_buffer: EditBuffer::new(),
            edit: None,
            viewing: None,
            schema_generation: 0,
            data_generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Ready
        }
    }

    pub fn query(&self) -> DataPageQuery {
        DataPageQuery {
            table: self.table.clone(),
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
        }
    }

    pub fn header_columns(&self) -> Vec<ColumnDescriptor> {
        header_columns(&self.columns)
    }

    pub fn form_columns(&self) -> Vec<ColumnDescriptor> {
        form_columns(&self.columns)
    }

    // ── loading ────────────────────────────────────────────────────────────

    /// Enters `Loading` and issues fresh tickets for both slices.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.loading = true;
        self.schema_generation += 1;
        LoadRequest {
            table: self.table.clone(),
            schema: SchemaTicket(self.schema_generation),
            data: self.next_data_ticket(),
            query: self.query(),
        }
    }

    /// Data-only reload that leaves the phase alone.
    pub fn begin_refresh(&mut self) -> DataTicket {
        self.next_data_ticket()
    }

    fn next_data_ticket(&mut self) -> DataTicket {
        self.data_generation += 1;
        DataTicket(self.data_generation)
    }

    pub fn apply_schema(
        &mut self,
        ticket: SchemaTicket,
        response: ApiResponse<TableSchema>,
    ) -> Applied {
        if ticket.0 != self.schema_generation {
            log::debug!("{}: dropping stale schema response", self.table);
            return Applied::Stale;
        }
        match response.data.filter(|_| response.success) {
            Some(schema) => {
                self.columns = schema.columns;
                Applied::Ok
            }
            None => {
                let message = response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| SCHEMA_FALLBACK.to_string());
                self.error = Some(message.clone());
                Applied::Failed(message)
            }
        }
    }

    pub fn apply_data(&mut self, ticket: DataTicket, response: ApiResponse<TablePage>) -> Applied {
        if ticket.0 != self.data_generation {
            log::debug!("{}: dropping stale data response", self.table);
            return Applied::Stale;
        }
        self.loading = false;
        match response.data.filter(|_| response.success) {
            Some(page) => {
                self.rows = page.rows;
                self.pagination = page.pagination;
                self.error = None;
                Applied::Ok
            }
            None => {
                let message = response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| DATA_FALLBACK.to_string());
                self.rows.clear();
                self.error = Some(message.clone());
                Applied::Failed(message)
            }
        }
    }

    /// Returns whether a reload is needed. A new term starts from page 1.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.page = 1;
        true
    }

    /// Returns whether a reload is needed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == 0 || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    // ── dialogs ────────────────────────────────────────────────────────────

    pub fn open_create(&mut self) {
        if !self.create_open {
            self.create_buffer.clear();
        }
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
        self.create_buffer.clear();
    }

    /// Seeds the edit buffer from `record`. Records without an id cannot be
    /// edited; returns false for those.
    pub fn open_edit(&mut self, record: &Record) -> bool {
        match RecordId::of(record) {
            Some(id) => {
                self.edit = Some(EditTarget {
                    id,
                    buffer: record.clone(),
                });
                true
            }
            None => false,
        }
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    pub fn buffer(&self, target: FormTarget) -> Option<&EditBuffer> {
        match target {
            FormTarget::Create => self.create_open.then_some(&self.create_buffer),
            FormTarget::Edit => self.edit.as_ref().map(|e| &e.buffer),
        }
    }

    /// Single mapping update: `name` → `value` in the target buffer.
    pub fn set_field(&mut self, target: FormTarget, name: &str, value: Value) {
        let buffer = match target {
            FormTarget::Create if self.create_open => &mut self.create_buffer,
            FormTarget::Edit => match self.edit.as_mut() {
                Some(edit) => &mut edit.buffer,
                None => return,
            },
            FormTarget::Create => return,
        };
        buffer.insert(name.to_string(), value);
    }

    // ── mutations ──────────────────────────────────────────────────────────

    fn renames(&self) -> FieldRenames {
        FieldRenames::from_columns(&self.columns)
    }

    pub fn submit_create(&self) -> Option<MutationRequest> {
        if !self.create_open {
            return None;
        }
        Some(MutationRequest {
            kind: MutationKind::Create,
            table: self.table.clone(),
            body: self.renames().apply(&self.create_buffer),
            reload: self.query(),
        })
    }

    pub fn submit_update(&self) -> Option<MutationRequest> {
        let edit = self.edit.as_ref()?;
        Some(MutationRequest {
            kind: MutationKind::Update(edit.id.clone()),
            table: self.table.clone(),
            body: self.renames().apply(&edit.buffer),
            reload: self.query(),
        })
    }

    /// Call only after the user confirmed the delete.
    pub fn request_delete(&self, record: &Record) -> Option<MutationRequest> {
        Some(MutationRequest {
            kind: MutationKind::Delete(RecordId::of(record)?),
            table: self.table.clone(),
            body: Record::new(),
            reload: self.query(),
        })
    }

    /// On success closes the matching dialog, clears its buffer and asks for
    /// exactly one reload of the captured query. On failure nothing changes.
    pub fn finish_mutation(
        &mut self,
        request: &MutationRequest,
        response: &ApiResponse<Value>,
    ) -> MutationOutcome {
        if !response.success {
            return MutationOutcome {
                notice: Notice::Error(response.error_message(request.kind.failure_fallback())),
                reload: None,
            };
        }
        match &request.kind {
            MutationKind::Create => self.close_create(),
            MutationKind::Update(id) => {
                if self.edit.as_ref().map(|e| &e.id) == Some(id) {
                    self.close_edit();
                }
            }
            MutationKind::Delete(_) => {}
        }
        MutationOutcome {
            notice: Notice::Success(request.kind.success_message().to_string()),
            reload: Some(request.reload.clone()),
        }
    }

    // ── record view ────────────────────────────────────────────────────────

    pub fn open_record_view(&mut self, record: &Record) -> Option<RecordId> {
        let id = RecordId::of(record)?;
        self.viewing = Some(RecordView::Loading(id.clone()));
        Some(id)
    }

    pub fn apply_record(&mut self, id: &RecordId, response: ApiResponse<Record>) -> Applied {
        if self.viewing.as_ref().map(RecordView::id) != Some(id) {
            return Applied::Stale;
        }
        let view = match response.data.filter(|_| response.success) {
            Some(record) => RecordView::Loaded(id.clone(), record),
            None => RecordView::Failed(
                id.clone(),
                response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| RECORD_FALLBACK.to_string()),
            ),
        };
        let applied = match &view {
            RecordView::Failed(_, message) => Applied::Failed(message.clone()),
            _ => Applied::Ok,
        };
        self.viewing = Some(view);
        applied
    }

    pub fn close_record_view(&mut self) {
        self.viewing = None;
    }
}
