use std::sync::{Mutex, Once};

use jvm_normalize::{
    jvm::{
        class::{AccessFlags, Class, InnerClassInfo, NestedClassAccessFlags},
        method::{
            AccessFlags as MethodAccessFlags, AnnotationVisibility, Method, ParameterAnnotations,
        },
        references::ClassRef,
    },
    transform::{Pipeline, PipelineConfig},
};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Keeps every record so that tests can look for the ones about their own classes.
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn records_mentioning(class_name: &str) -> Vec<(Level, String)> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, message)| message.contains(class_name))
        .cloned()
        .collect()
}

fn init_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn inner_class(
    name: &str,
    descriptor: &str,
    visibility: AnnotationVisibility,
    len: usize,
) -> Class {
    let mut class = Class::new(AccessFlags::SUPER, name);
    class.inner_classes.push(InnerClassInfo {
        inner_class: ClassRef::new(name),
        outer_class: Some(ClassRef::new("org/pkg/Outer")),
        inner_name: Some("Inner".to_owned()),
        inner_class_access_flags: NestedClassAccessFlags::empty(),
    });
    let mut constructor = Method::new(
        ClassRef::new(name),
        MethodAccessFlags::empty(),
        Method::CONSTRUCTOR_NAME,
        descriptor.parse().unwrap(),
    );
    *constructor.parameter_annotations_mut(visibility) =
        ParameterAnnotations::with_parameters(vec![Vec::new(); len]);
    class.methods.push(constructor);
    class
}

fn mismatched_inner_class(name: &str) -> Class {
    inner_class(name, "(ILorg/pkg/Outer;)V", AnnotationVisibility::Visible, 2)
}

#[test]
fn verbose_pipeline_warns_about_mismatch() {
    init_logger();
    let pipeline = Pipeline::new(&PipelineConfig::default().with_verbose(true)).unwrap();
    let mut class = mismatched_inner_class("org/pkg/Outer$Verbose");
    let anomalies = pipeline.transform(&mut class);
    assert_eq!(anomalies.len(), 1);

    let records = records_mentioning("org/pkg/Outer$Verbose");
    assert!(records.iter().any(|(level, message)| {
        *level == Level::Debug
            && message.contains("Considering org/pkg/Outer$Verbose")
            && message.contains("inner class of org/pkg/Outer")
    }));
    assert!(records.iter().any(|(level, message)| {
        *level == Level::Warn
            && message.contains("org/pkg/Outer$Verbose::<init>(ILorg/pkg/Outer;)V")
            && message.contains("[Lorg/pkg/Outer;]")
    }));
}

#[test]
fn silent_pipeline_logs_nothing() {
    init_logger();
    let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
    let mut class = mismatched_inner_class("org/pkg/Outer$Silent");
    let anomalies = pipeline.transform(&mut class);
    assert_eq!(anomalies.len(), 1);
    assert!(records_mentioning("org/pkg/Outer$Silent").is_empty());
}

#[test]
fn verbose_pipeline_warns_about_unexpected_count() {
    init_logger();
    let pipeline = Pipeline::new(&PipelineConfig::default().with_verbose(true)).unwrap();
    let mut class = inner_class(
        "org/pkg/Outer$Count",
        "(Lorg/pkg/Outer;IJ)V",
        AnnotationVisibility::Invisible,
        5,
    );
    let anomalies = pipeline.transform(&mut class);
    assert_eq!(anomalies.len(), 1);

    let records = records_mentioning("org/pkg/Outer$Count");
    assert!(records.iter().any(|(level, message)| {
        *level == Level::Warn
            && message.contains("RuntimeInvisibleParameterAnnotations")
            && message.contains("org/pkg/Outer$Count::<init>(Lorg/pkg/Outer;IJ)V")
            && message.contains(": 5")
    }));
}
