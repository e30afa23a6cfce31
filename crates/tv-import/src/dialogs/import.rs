//! Import dialog
//!
//! Lets the user pick dataset leaves from the catalog hierarchy, constrain
//! the time window, and confirm the selection as standalone traces or as a
//! whole graph. The dialog owns its selection tree state, range engine and
//! dataset index; the tree/date-picker widgets drive it through the typed
//! methods below.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use tv_core::modal::{
    ModalAction, ModalBody, ModalComponent, ModalHeader, ModalView, ModalWidget, Resolver,
    TreeNode,
};
use tv_data::{DataSource, DatasetIndex, DatasetRef, Graph, GraphStyle, Trace};

use crate::compile::{GraphDefaults, GraphSpec, PipelineCompiler, VariantExpansion};
use crate::range::{RangeEngine, RangeState};
use crate::selection::SelectionState;

/// What the caller asked the dialog to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Standalone traces for an existing graph
    Traces,
    /// A new graph wrapping the traces
    Graph,
}

/// Immutable configuration for one dialog invocation
#[derive(Debug, Clone)]
pub struct ImportArgs {
    pub mode: ImportMode,
    pub expansion: VariantExpansion,
    pub defaults: GraphDefaults,
}

impl ImportArgs {
    /// Import standalone traces
    pub fn traces() -> Self {
        Self {
            mode: ImportMode::Traces,
            expansion: VariantExpansion::default(),
            defaults: GraphDefaults::default(),
        }
    }

    /// Create a new graph
    pub fn graph() -> Self {
        Self {
            mode: ImportMode::Graph,
            ..Self::traces()
        }
    }
}

/// Result delivered to the caller on confirmation
#[derive(Debug, Clone)]
pub enum ImportResult {
    Traces(Vec<Trace>),
    Graph(Graph),
}

/// User-editable graph form fields
#[derive(Debug, Clone)]
struct GraphForm {
    title: String,
    x_label: String,
    y_label: String,
}

/// The import dialog
pub struct ImportDialog {
    args: ImportArgs,
    resolver: Resolver<ImportResult>,

    /// None until the catalog delivery arrives
    sources: Option<Vec<DataSource>>,
    index: DatasetIndex,

    selection: SelectionState,
    range: RangeEngine,
    form: GraphForm,
}

impl ImportDialog {
    /// Create the dialog with its resolution slot
    pub fn new(args: ImportArgs, resolver: Resolver<ImportResult>) -> Self {
        let form = GraphForm {
            title: args.defaults.title.clone(),
            x_label: args.defaults.x_label.clone(),
            y_label: args.defaults.y_label.clone(),
        };

        Self {
            args,
            resolver,
            sources: None,
            index: DatasetIndex::new(),
            selection: SelectionState::new(),
            range: RangeEngine::new(),
            form,
        }
    }

    /// Wholesale catalog delivery
    ///
    /// Replaces the source list and rebuilds the dataset index. A delivery
    /// arriving after the dialog resolved has no visible effect.
    pub fn sources_loaded(&mut self, sources: Vec<DataSource>) {
        if self.resolver.is_resolved() {
            debug!(
                modal_id = %self.resolver.modal_id(),
                "ignoring catalog delivery for a resolved dialog"
            );
            return;
        }

        self.index.rebuild(&sources);
        self.sources = Some(sources);
    }

    /// Full checked set reported by the tree widget
    ///
    /// The widget re-broadcasts the complete selection on every change;
    /// the resulting transition drives the range engine.
    pub fn on_check(&mut self, checked: &[DatasetRef]) {
        let transition = self.selection.on_check(checked, &self.index);

        let index = &self.index;
        let datasets = self.selection.iter().filter_map(|node| index.resolve(node));
        self.range.on_selection(transition, datasets);
    }

    /// Named form field edit from the graph column
    pub fn on_field_change(&mut self, name: &str, value: &str) {
        match name {
            "title" => self.form.title = value.to_string(),
            "xLabel" => self.form.x_label = value.to_string(),
            "yLabel" => self.form.y_label = value.to_string(),
            other => warn!(field = other, "ignoring unknown form field"),
        }
    }

    /// User-driven window change from the range widget
    pub fn on_range_change(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.range.on_range_change(start, end);
    }

    /// Current range state, as handed to the range widget
    pub fn range_state(&self) -> RangeState {
        self.range.state()
    }

    /// Whether the confirm action is available
    ///
    /// Confirmation stays blocked while nothing is selected; there is no
    /// empty-selection error path anywhere downstream.
    pub fn can_confirm(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Compile the selection and resolve the pending request
    pub fn confirm(&self) -> bool {
        if !self.can_confirm() {
            debug!("confirm ignored while the selection is empty");
            return false;
        }

        let compiler = PipelineCompiler::new(&self.index).with_expansion(self.args.expansion);
        let result = match self.args.mode {
            ImportMode::Traces => ImportResult::Traces(compiler.traces(self.selection.iter())),
            ImportMode::Graph => {
                let Some(x_range) = self.range.state().x_range() else {
                    warn!("graph confirm ignored without an active window");
                    return false;
                };

                let spec = GraphSpec {
                    title: self.form.title.clone(),
                    x_label: self.form.x_label.clone(),
                    y_label: self.form.y_label.clone(),
                    style: GraphStyle::default(),
                    x_range,
                };
                ImportResult::Graph(compiler.graph(self.selection.iter(), spec))
            }
        };

        self.resolver.resolve(result)
    }

    /// Dismissal path shared by the cancel button, close button and
    /// backdrop click
    pub fn cancel(&self) -> bool {
        self.resolver.cancel()
    }

    fn tree_nodes(&self, sources: &[DataSource]) -> Vec<TreeNode> {
        sources
            .iter()
            .map(|source| {
                let children = source
                    .datasets
                    .iter()
                    .map(|dataset| {
                        let key = format!("{}::{}", source.id, dataset.id);
                        match (&dataset.variants, self.args.expansion) {
                            // Variants are picked per leaf, so the family
                            // expands into selectable variant nodes
                            (Some(variants), VariantExpansion::PerLeaf) => {
                                let leaves = variants
                                    .iter()
                                    .map(|variant| {
                                        TreeNode::leaf(
                                            format!("{key}::{variant}"),
                                            variant.clone(),
                                        )
                                    })
                                    .collect();
                                TreeNode::branch(key, dataset.name.clone(), leaves)
                            }
                            _ => TreeNode::leaf(key, dataset.name.clone()),
                        }
                    })
                    .collect();
                TreeNode::branch(source.id.clone(), source.name.clone(), children)
            })
            .collect()
    }
}

impl ModalView for ImportDialog {
    fn header(&self) -> ModalHeader {
        let title = match self.args.mode {
            ImportMode::Graph => "Přidat graf",
            ImportMode::Traces => "Importovat křivku",
        };
        ModalHeader {
            title: title.to_string(),
        }
    }

    fn body(&self) -> ModalBody {
        let Some(sources) = &self.sources else {
            return ModalBody::Message("Načítám křivky...".to_string());
        };

        let mut widgets = vec![ModalWidget::CheckTree {
            nodes: self.tree_nodes(sources),
        }];

        if self.args.mode == ImportMode::Graph {
            widgets.push(ModalWidget::TextField {
                name: "title".to_string(),
                label: "Název grafu".to_string(),
                value: self.form.title.clone(),
            });
            widgets.push(ModalWidget::TextField {
                name: "xLabel".to_string(),
                label: "Popis osy x".to_string(),
                value: self.form.x_label.clone(),
            });
            widgets.push(ModalWidget::TextField {
                name: "yLabel".to_string(),
                label: "Popis osy y".to_string(),
                value: self.form.y_label.clone(),
            });

            let state = self.range.state();
            widgets.push(ModalWidget::DateRange {
                min: state.min_date,
                max: state.max_date,
                start: state.start_date,
                end: state.end_date,
            });
        }

        ModalBody::Widgets(widgets)
    }

    fn footer(&self) -> Vec<ModalAction> {
        let label = match self.args.mode {
            ImportMode::Graph => "Přidat",
            ImportMode::Traces => "Importovat",
        };
        vec![
            ModalAction::primary("confirm", label).with_enabled(self.can_confirm()),
            ModalAction::secondary("cancel", "Zrušit"),
        ]
    }
}

impl ModalComponent for ImportDialog {
    type Output = ImportResult;
}
