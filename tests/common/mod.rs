#![allow(dead_code)]

use clogview::{
    command::{parse_command, CommandExecutor},
    host::HeadlessHost,
    log::{LogRecord, RecordFormat, RecordStore, Severity},
    operations::Outcome,
    view::ViewState,
};

/// Helper to create a record with all location fields filled in
pub fn create_test_record(
    severity: Severity,
    log_type: &str,
    function: &str,
    file_line: &str,
    message: &str,
) -> LogRecord {
    LogRecord::new(severity, message)
        .with_type(log_type)
        .with_function(function)
        .with_file_line(file_line)
}

/// Helper to create a store resembling a short editor session
pub fn create_store_with_records() -> RecordStore {
    RecordStore::from_records(vec![
        create_test_record(
            Severity::Info,
            "wm.files",
            "wm_file_read_report",
            "source/blender/windowmanager/intern/wm_files.cc:1021",
            "Read blend: untitled.blend",
        ),
        create_test_record(
            Severity::Debug,
            "bke.cache",
            "BKE_cache_get",
            "source/blender/blenkernel/intern/cache.cc:88",
            "cache miss for frame 12",
        )
        .with_verbosity(2),
        create_test_record(
            Severity::Warn,
            "wm.operator",
            "WM_operator_poll",
            "source/blender/windowmanager/intern/wm_operators.cc:310",
            "poll failed: context is incorrect",
        ),
        create_test_record(
            Severity::Info,
            "wm.files",
            "wm_file_write",
            "source/blender/windowmanager/intern/wm_files.cc:2140",
            "Saved untitled.blend",
        )
        .with_verbosity(1),
        create_test_record(
            Severity::Error,
            "gpu.shader",
            "GPU_shader_create",
            "source/blender/gpu/intern/gpu_shader.cc:455",
            "shader compile failed",
        ),
        create_test_record(
            Severity::Info,
            "bke.cache",
            "BKE_cache_free",
            "source/blender/blenkernel/intern/cache.cc:140",
            "freed 3 cache entries",
        )
        .with_verbosity(3),
        create_test_record(
            Severity::Error,
            "wm.files",
            "wm_file_read_report",
            "source/blender/windowmanager/intern/wm_files.cc:1044",
            "File not found: missing.blend",
        ),
        create_test_record(
            Severity::Fatal,
            "gpu.context",
            "GPU_context_create",
            "source/blender/gpu/intern/gpu_context.cc:77",
            "no OpenGL context",
        ),
    ])
}

/// Helper to run text commands the way the CLI does, re-laying out rows first
pub fn run_commands(
    view: &mut ViewState,
    store: &mut RecordStore,
    host: &mut HeadlessHost,
    commands: &[&str],
) -> Vec<Outcome> {
    commands
        .iter()
        .map(|input| {
            host.layout(&view.filters, store);
            CommandExecutor::new(view, store, host, RecordFormat::default())
                .execute(parse_command(input))
        })
        .collect()
}

/// Sequence positions of the selected records, hidden ones included
pub fn selected_indices(view: &ViewState, store: &RecordStore) -> Vec<usize> {
    store
        .iter()
        .enumerate()
        .filter(|(_, record)| view.selection.is_record_selected(record))
        .map(|(index, _)| index)
        .collect()
}

/// Helper to render the view with a visible-count header line
pub fn render_view_to_string(view: &ViewState, store: &RecordStore) -> String {
    format!(
        "{} visible\n{}",
        view.filters.visible_count(store),
        view.render(store, RecordFormat::default())
    )
    .trim_end()
    .to_string()
}
