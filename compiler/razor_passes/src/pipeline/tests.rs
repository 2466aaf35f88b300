use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::{PassPhase, DEFAULT_FEATURE_ORDER, LATE_FEATURE_ORDER};
use razor_ir::{CodeGenerationOptions, IrBuilder, SourceDocument};
use pretty_assertions::assert_eq;

struct Recording {
    name: &'static str,
    phase: PassPhase,
    order: i32,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl IntermediateNodePass for Recording {
    fn name(&self) -> &'static str {
        self.name
    }

    fn phase(&self) -> PassPhase {
        self.phase
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn execute(
        &self,
        _document: &CodeDocument,
        _root: &mut IntermediateNode,
    ) -> Result<(), ReferenceError> {
        self.log.borrow_mut().push(self.name);
        Ok(())
    }
}

fn recording(
    log: &Rc<RefCell<Vec<&'static str>>>,
    name: &'static str,
    phase: PassPhase,
    order: i32,
) -> Recording {
    Recording {
        name,
        phase,
        order,
        log: Rc::clone(log),
    }
}

#[test]
fn test_run_orders_by_phase_then_order_then_registration() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut pipeline = PassPipeline::new();
    pipeline
        .add(recording(&log, "late", PassPhase::Optimization, LATE_FEATURE_ORDER))
        .add(recording(&log, "opt-a", PassPhase::Optimization, DEFAULT_FEATURE_ORDER))
        .add(recording(&log, "directive", PassPhase::DirectiveClassifier, 5))
        .add(recording(&log, "opt-b", PassPhase::Optimization, DEFAULT_FEATURE_ORDER))
        .add(recording(&log, "classifier", PassPhase::DocumentClassifier, 9999));

    let document = CodeDocument::new(SourceDocument::new(""));
    let mut root = IrBuilder::document(CodeGenerationOptions::runtime())
        .build()
        .unwrap();
    pipeline.run(&document, &mut root).unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["classifier", "directive", "opt-a", "opt-b", "late"]
    );
}

#[test]
fn test_default_pipeline_order() {
    let pipeline = PassPipeline::with_default_passes(DocumentClassifierOptions::default());
    let names: Vec<_> = pipeline.ordered().iter().map(|pass| pass.name()).collect();
    assert_eq!(
        names,
        vec![
            "DocumentClassifierPass",
            "DesignTimeDirectivePass",
            "InheritsDirectivePass",
            "FunctionsDirectivePass",
            "SectionDirectivePass",
            "EliminateMethodBodyPass",
            "MetadataAttributePass",
            "DirectiveRemovalPass",
            "DefaultTagHelperOptimizationPass",
            "PreallocatedTagHelperAttributeOptimizationPass",
        ]
    );
}

#[test]
fn test_debug_lists_pass_names() {
    let mut pipeline = PassPipeline::new();
    pipeline.add(DirectiveRemovalPass);
    assert_eq!(format!("{pipeline:?}"), "[\"DirectiveRemovalPass\"]");
    assert_eq!(pipeline.len(), 1);
}
