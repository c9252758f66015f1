// imagine/src/core/dispatcher.rs
use super::dialog::{InputSource, MenuChoice, ResizeDialog};
use super::session::Session;
use super::{InfoFields, ProcessSettings, Result};
use crate::cli::Commands;
use crate::processors::{Compressor, Loader, Resizer, Scanner, Status};
use crate::utils::{containing_folder, print_status};
use std::io::Write;
use std::path::Path;

/// Runs parsed commands against one session, writing everything the user
/// sees to `out` and reading interactive answers from `input`.
pub struct Dispatcher<W, I> {
    session: Session,
    scanner: Scanner,
    loader: Loader,
    out: W,
    input: I,
}

impl<W: Write, I: InputSource> Dispatcher<W, I> {
    pub fn new(out: W, input: I) -> Self {
        Self {
            session: Session::new(),
            scanner: Scanner::new(),
            loader: Loader::new(),
            out,
            input,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn report(&mut self, status: Status, message: &str) -> Result<()> {
        print_status(&mut self.out, status, message)
    }

    /// Runs one command. Failures are printed and swallowed so that the
    /// next command in a chain still runs; returns whether it succeeded.
    pub fn dispatch(&mut self, command: Commands) -> bool {
        let name = command.name();
        log::debug!("Running {}", name);

        let result = match command {
            Commands::SetWorkingDir { working_directory } => self.set_working_dir(&working_directory),
            Commands::ImageInfo {
                image,
                size,
                mode,
                format,
            } => self.image_info(&image, InfoFields { size, mode, format }),
            Commands::ProcessImage {
                image,
                save_to,
                algorithm,
                quality,
            } => self.process_image(
                &image,
                save_to.as_deref(),
                ProcessSettings::from_args(algorithm, quality),
            ),
            Commands::ShowImages {
                directory,
                recursive,
            } => self.show_images(&directory, recursive),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{} failed: {:?}", name, e);
                if let Err(write_err) = self.report(Status::Failed, &e.to_string()) {
                    log::error!("Could not report failure of {}: {}", name, write_err);
                }
                false
            }
        }
    }

    pub fn set_working_dir(&mut self, directory: &Path) -> Result<()> {
        let count = self.session.set_working_dir(directory, &self.scanner)?;
        writeln!(self.out, "{} Supported Image format(s) found", count)?;

        let line = format!("working directory: {}", self.session.working_dir());
        self.report(Status::Success, &line)
    }

    pub fn image_info(&mut self, image: &Path, fields: InfoFields) -> Result<()> {
        let line = format!("working directory: {}", self.session.working_dir());
        self.report(Status::Success, &line)?;

        let metadata = self.loader.read_metadata(image)?;
        for line in metadata.describe(fields) {
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    pub fn process_image(
        &mut self,
        image: &Path,
        save_to: Option<&Path>,
        settings: ProcessSettings,
    ) -> Result<()> {
        settings.validate()?;

        let loaded = self.loader.load(image)?;
        let folder = containing_folder(image);

        writeln!(self.out, "IMAGE INFO")?;
        writeln!(self.out, "{}", loaded.metadata.summary())?;
        writeln!(self.out, "Folder: {}", folder.display())?;
        writeln!(self.out, "\n*** Image opened for processing ***")?;
        writeln!(self.out, "*** Select from the options below to continue ***")?;
        writeln!(self.out, "{}", MenuChoice::MENU)?;

        let save_dir = save_to.unwrap_or(folder.as_path());
        let request = ResizeDialog::new(image, save_dir).run(&mut self.input, &mut self.out)?;

        std::fs::create_dir_all(&request.save_dir)?;
        let resized = Resizer::new(settings.algorithm).fit_within(&loaded.image, request.width, request.height);
        let destination = request.destination();
        Compressor::new(settings.quality).save(&resized, &destination)?;

        writeln!(
            self.out,
            "Saved {}x{} image to {}",
            resized.width(),
            resized.height(),
            destination.display()
        )?;

        Ok(())
    }

    pub fn show_images(&mut self, directory: &Path, recursive: bool) -> Result<()> {
        for path in self.scanner.scan(directory, recursive)? {
            if let Some(name) = path.file_name() {
                writeln!(self.out, "{}", name.to_string_lossy())?;
            }
        }

        Ok(())
    }
}
