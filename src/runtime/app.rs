use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use gridlens::cli::StartupConfig;
use gridlens::commands::Cmd;
use gridlens::grid::{load_csv, TableData, TableViewport};
use gridlens::messages::{DataMsg, Msg};
use gridlens::model::TableModel;
use gridlens::update::update;
use gridlens::view::FooterStats;

use super::input::{parse_line, ShellCommand, HELP};
use super::render::render_table;

/// Line-driven front end: feeds commands through `update` and renders the result
pub struct App<W: Write> {
    model: TableModel,
    viewport: TableViewport,
    out: W,
}

impl<W: Write> App<W> {
    /// Load the table and apply the startup search and sort
    pub fn new(startup: &StartupConfig, out: W) -> Result<Self> {
        let data = load_csv(&startup.path, startup.delimiter)
            .with_context(|| format!("Failed to load {}", startup.path.display()))?;
        tracing::info!(
            path = %startup.path.display(),
            rows = data.row_count(),
            "table loaded"
        );

        let viewport = TableViewport::new(startup.grid.viewport_rows);
        let model = TableModel::with_config(data, startup.grid.clone());
        let mut app = Self {
            model,
            viewport,
            out,
        };

        if let Some(term) = &startup.search {
            app.dispatch(Msg::search(term.clone()))?;
        }
        if let Some(key) = &startup.sort {
            app.dispatch(Msg::sort_by(key.clone()))?;
        }
        Ok(app)
    }

    #[cfg(test)]
    pub fn model(&self) -> &TableModel {
        &self.model
    }

    #[cfg(test)]
    pub fn viewport(&self) -> &TableViewport {
        &self.viewport
    }

    /// Process commands until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.render()?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            match parse_line(&line) {
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(line = %line, error = %e, "invalid command");
                    writeln!(self.out, "error: {}", e)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Run one parsed command, re-rendering if the table changed
    pub fn execute(&mut self, command: ShellCommand) -> Result<()> {
        if let Some(cell) = command.cells().into_iter().find(|c| !self.model.contains(*c)) {
            tracing::warn!(%cell, rows = self.model.row_count(), "cell outside table");
            writeln!(self.out, "error: cell outside table: {}", cell)?;
            return Ok(());
        }

        let mut redraw = false;

        match &command {
            ShellCommand::Show => redraw = true,
            ShellCommand::Stats => {
                let stats = FooterStats::from_model(&self.model);
                writeln!(self.out, "{}", serde_json::to_string_pretty(&stats)?)?;
            }
            ShellCommand::Help => writeln!(self.out, "{}", HELP)?,
            ShellCommand::Load(path) => match load_csv(path, None) {
                Ok(data) => redraw |= self.dispatch(Msg::Data(DataMsg::Load(data)))?,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "load failed");
                    writeln!(self.out, "error: {}", e)?;
                }
            },
            _ => {
                for msg in command.to_msgs() {
                    redraw |= self.dispatch(msg)?;
                }
            }
        }

        if redraw {
            self.render()?;
        }
        Ok(())
    }

    /// Send one message through the update loop. Returns true if a redraw is needed.
    fn dispatch(&mut self, msg: Msg) -> Result<bool> {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd)?;
                Ok(redraw)
            }
            None => Ok(false),
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::ScrollToRow(row) => {
                self.viewport.ensure_visible(row, self.model.row_count());
                tracing::trace!(row, top = self.viewport.top_row, "scrolled");
            }
            Cmd::CopyToClipboard(text) => self.copy(text)?,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd)?;
                }
            }
        }
        Ok(())
    }

    fn copy(&mut self, text: String) -> Result<()> {
        if self.model.config.clipboard {
            match arboard::Clipboard::new().and_then(|mut c| c.set_text(text.clone())) {
                Ok(()) => {
                    writeln!(self.out, "copied {} bytes to clipboard", text.len())?;
                    return Ok(());
                }
                Err(e) => tracing::warn!(error = %e, "clipboard unavailable, printing instead"),
            }
        }
        writeln!(self.out, "copied: {}", text)?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let text = render_table(&self.model, &self.viewport);
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}
