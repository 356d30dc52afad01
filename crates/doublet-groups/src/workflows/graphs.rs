use super::log_table_stats;
use crate::core::io::traits::ContactSource;
use crate::core::models::category::{Membership, SubCategory};
use crate::core::models::error::FormatError;
use crate::core::models::expert::ExpertAnnotations;
use crate::core::models::ids::DoubletId;
use crate::core::models::program::Program;
use crate::core::models::record::{DoubletRecord, ProgramDescriptors};
use crate::core::taxonomy::unconditional::unconditional_categories;
use crate::engine::config::AggregationConfig;
use crate::engine::consensus::{resolve, sources_for};
use crate::engine::error::EngineError;
use crate::engine::overrides::apply_expert_overrides;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::table::ResultTable;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Sub-categories resolved once per physical doublet, on its forward listing.
const ORIENTED_SUB_CATEGORIES: [SubCategory; 2] = [SubCategory::BasePair, SubCategory::Stacking];

/// Sub-categories resolved for every listing, forward or reverse.
const DIRECTIONAL_SUB_CATEGORIES: [SubCategory; 2] =
    [SubCategory::BasePhosphate, SubCategory::BaseRibose];

/// The contact sources available for one structure.
///
/// `close_contacts` lists every doublet to classify and supplies its pair
/// type. A program without a source contributes no descriptors.
pub struct ContactSources<'a> {
    close_contacts: &'a dyn ContactSource,
    programs: BTreeMap<Program, &'a dyn ContactSource>,
}

impl<'a> ContactSources<'a> {
    pub fn new(close_contacts: &'a dyn ContactSource) -> Self {
        Self {
            close_contacts,
            programs: BTreeMap::new(),
        }
    }

    pub fn with_program(mut self, program: Program, source: &'a dyn ContactSource) -> Self {
        self.programs.insert(program, source);
        self
    }

    pub fn program(&self, program: Program) -> Option<&'a dyn ContactSource> {
        self.programs.get(&program).copied()
    }

    /// Descriptors of every program for a doublet, detailed form.
    fn detailed_record(&self, short_id: &DoubletId, record: DoubletRecord) -> DoubletRecord {
        Program::ALL
            .into_iter()
            .filter_map(|program| {
                let descriptor = self.program(program)?.descriptor(short_id)?;
                Some((program, descriptor.full))
            })
            .fold(record, |record, (program, descriptor)| {
                record.with_descriptor(program, descriptor)
            })
    }

    /// Descriptors of the programs assigned to `sub_category`, restricted to
    /// contacts of that sub-category.
    fn scoped_descriptors(
        &self,
        short_id: &DoubletId,
        sub_category: SubCategory,
    ) -> Result<ProgramDescriptors, FormatError> {
        Ok(sources_for(sub_category)?
            .programs()
            .into_iter()
            .filter_map(|program| {
                let descriptor = self
                    .program(program)?
                    .category_descriptor(short_id, sub_category, false)?;
                Some((program, descriptor))
            })
            .collect())
    }
}

/// Classifies every close doublet of one structure and applies expert overrides.
///
/// For each doublet listed by the close-contacts source, the unconditional
/// taxonomy and the base-pair and stacking consensus are computed on its
/// forward listing only; base-phosphate and base-ribose are resolved on
/// every listing. Identifiers in the table are qualified with the structure.
#[instrument(skip_all, name = "graph_aggregation", fields(structure = %config.structure_id))]
pub fn run(
    sources: &ContactSources,
    experts: &ExpertAnnotations,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<ResultTable, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Classifying Doublets",
    });
    let ids = sources.close_contacts.list_ids();
    info!(
        "Classifying {} close doublet(s) of {}.",
        ids.len(),
        config.structure_id
    );

    let mut table = ResultTable::new();
    reporter.track(&ids, |short_id| {
        let full_id = DoubletId::qualified(&config.structure_id, short_id);
        for membership in classify_doublet(sources, short_id, &full_id)? {
            table.record(&membership, &full_id);
        }
        Ok::<(), EngineError>(())
    })?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Applying Expert Overrides",
    });
    let summary = apply_expert_overrides(&mut table, experts);
    info!(
        removed = summary.removed,
        added = summary.added,
        "Expert overrides applied."
    );
    reporter.report(Progress::Message(format!(
        "Expert overrides: {} removed, {} added",
        summary.removed, summary.added
    )));
    reporter.report(Progress::PhaseFinish);

    log_table_stats(&table);
    Ok(table)
}

fn classify_doublet(
    sources: &ContactSources,
    short_id: &DoubletId,
    full_id: &DoubletId,
) -> Result<Vec<Membership>, EngineError> {
    let close = sources.close_contacts;
    let pair_type = close
        .pair_type(short_id)
        .ok_or_else(|| FormatError::MissingPairType(short_id.to_string()))?;

    let mut memberships = Vec::new();
    if !close.is_reverse(short_id) {
        let record = sources.detailed_record(
            short_id,
            DoubletRecord::new(full_id.clone(), pair_type.clone()),
        );
        memberships.extend(
            unconditional_categories(&record)
                .into_iter()
                .map(Membership::forward),
        );
        for sub_category in ORIENTED_SUB_CATEGORIES {
            let descriptors = sources.scoped_descriptors(short_id, sub_category)?;
            memberships.extend(resolve(sub_category, &descriptors, &pair_type)?);
        }
    }
    for sub_category in DIRECTIONAL_SUB_CATEGORIES {
        let descriptors = sources.scoped_descriptors(short_id, sub_category)?;
        memberships.extend(resolve(sub_category, &descriptors, &pair_type)?);
    }

    debug!(
        "{} ({}): {} categor(ies)",
        full_id,
        pair_type,
        memberships.len()
    );
    Ok(memberships)
}
