use crate::{AppState, BatchState, Effect, Msg, ToolkitPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ToolkitChecked { present } => {
            if present {
                state.set_toolkit(ToolkitPhase::Ready);
                state.set_status("OpenSSL found. Ready to convert.");
                reveal(&mut state)
            } else {
                state.set_toolkit(ToolkitPhase::Installing);
                state.set_status("OpenSSL not found. Starting installation...");
                vec![Effect::AcquireToolkit]
            }
        }
        Msg::StatusPosted(text) => {
            state.set_status(text);
            Vec::new()
        }
        Msg::InstallFinished { success } => {
            let phase = if success {
                ToolkitPhase::Ready
            } else {
                ToolkitPhase::Missing
            };
            state.set_toolkit(phase);
            Vec::new()
        }
        Msg::MainWindowReady => {
            // A failed install keeps its failure text on the status line.
            if state.toolkit() == ToolkitPhase::Ready {
                state.set_status("OpenSSL found. Drag and drop files to begin conversion.");
            }
            reveal(&mut state)
        }
        Msg::FilesPicked(paths) => {
            if state.batch() == BatchState::Idle {
                state.files_mut().add_files(paths);
                state.refresh_pending();
            }
            Vec::new()
        }
        Msg::FilesDropped(paths) => {
            if state.batch() == BatchState::Idle {
                state.files_mut().add_dropped(paths);
                state.refresh_pending();
            }
            Vec::new()
        }
        Msg::FolderPicked(folder) => {
            if state.batch() == BatchState::Idle {
                state.begin_scan();
                vec![Effect::ScanFolder { folder }]
            } else {
                Vec::new()
            }
        }
        Msg::FolderScanned { folder, files } => {
            // Convert is blocked while scans are outstanding, so no batch can
            // be running here.
            state.end_scan();
            state.files_mut().add_folder(&folder, files);
            state.refresh_pending();
            Vec::new()
        }
        Msg::ConvertClicked => {
            if state.batch() == BatchState::Idle
                && !state.is_scanning()
                && !state.files().is_empty()
            {
                let files = state.begin_batch();
                vec![Effect::ConvertBatch { files }]
            } else {
                Vec::new()
            }
        }
        Msg::ClearClicked => {
            if state.batch() == BatchState::Idle {
                state.clear_lists();
            }
            Vec::new()
        }
        Msg::QuitClicked => vec![Effect::Quit],
        Msg::FileConverted {
            index,
            total,
            output_name,
        } => {
            state.push_converted(output_name);
            state.set_status(format!("Converted {}/{} files.", index + 1, total));
            state.advance_progress(index);
            Vec::new()
        }
        Msg::FileSkipped { index, file_name } => {
            state.set_status(format!("Skipped non-.p7m file: {file_name}"));
            state.advance_progress(index);
            Vec::new()
        }
        Msg::FileFailed {
            index,
            file_name,
            detail,
        } => {
            state.set_status(format!("Error converting {file_name}."));
            state.advance_progress(index);
            vec![Effect::ShowError {
                title: "Conversion Error".to_string(),
                message: format!("Failed to convert {file_name}:\n{detail}"),
            }]
        }
        Msg::BatchFinished { processed } => {
            state.finish_batch(processed);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn reveal(state: &mut AppState) -> Vec<Effect> {
    if state.reveal_main_window() {
        vec![Effect::RevealMainWindow]
    } else {
        Vec::new()
    }
}
