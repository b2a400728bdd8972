use crate::domain::model::{
    day_dir_name, CreationLog, Layout, PlannedDir, ScaffoldOutcome, ScaffoldPlan, Year,
};
use crate::domain::ports::DirectoryStore;
use crate::utils::error::{Result, ScaffoldError};
use std::path::Path;

/// Computes the directories for `year` under `base`, year directory first,
/// then each day directory followed by its data directory.
pub fn plan_project_tree(year: &Year, base: &Path, layout: &Layout) -> ScaffoldPlan {
    let year_name = year.dir_name();
    let year_dir = base.join(&year_name);

    let mut dirs = Vec::with_capacity(1 + 2 * usize::from(layout.days));
    dirs.push(PlannedDir {
        path: year_dir.clone(),
        display: format!("{}/", year_name),
    });

    for day in 1..=layout.days {
        let day_name = day_dir_name(day);
        let day_dir = year_dir.join(&day_name);
        dirs.push(PlannedDir {
            path: day_dir.clone(),
            display: format!("  {}/{}/", year_name, day_name),
        });
        dirs.push(PlannedDir {
            path: day_dir.join(&layout.data_dir),
            display: format!("    {}/{}/{}/", year_name, day_name, layout.data_dir),
        });
    }

    ScaffoldPlan { year_dir, dirs }
}

pub struct Scaffolder<S: DirectoryStore> {
    store: S,
    layout: Layout,
}

impl<S: DirectoryStore> Scaffolder<S> {
    pub fn new(store: S) -> Self {
        Self::with_layout(store, Layout::default())
    }

    pub fn with_layout(store: S, layout: Layout) -> Self {
        Self { store, layout }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn plan(&self, year: &Year, base: &Path) -> ScaffoldPlan {
        plan_project_tree(year, base, &self.layout)
    }

    /// 建立年份目錄與每日目錄；任何一次建立失敗即中止，不回復已建立的目錄
    #[tracing::instrument(name = "create_project_tree", skip(self, base), fields(base = %base.display()))]
    pub fn create_project_tree(&self, year: &Year, base: &Path) -> Result<ScaffoldOutcome> {
        tracing::debug!("stepped into {} directory", base.display());

        let plan = self.plan(year, base);
        let mut log = CreationLog::new();

        for dir in &plan.dirs {
            self.store.create_dir(&dir.path).map_err(|source| {
                let err = ScaffoldError::DirectoryCreationError {
                    path: dir.path.clone(),
                    source,
                };
                tracing::error!("{}", err);
                err
            })?;
            tracing::debug!("made {} directory", dir.path.display());
            log.record(dir.display.clone());
        }

        let year_dir_exists = self.store.is_dir(&plan.year_dir);
        tracing::info!(
            "created {} directories under {}",
            log.len(),
            plan.year_dir.display()
        );

        Ok(ScaffoldOutcome {
            year_dir: plan.year_dir,
            year_dir_exists,
            log,
        })
    }
}
