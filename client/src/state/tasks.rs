//! Dashboard task list and points counter.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

/// Points per completed task.
pub const TASK_POINTS: i64 = 10;
/// Crossing this total upwards earns a celebration.
pub const POINTS_MILESTONE: i64 = 1300;
/// Score shown before any task is ticked.
pub const INITIAL_POINTS: i64 = 1250;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub title: &'static str,
    pub due: &'static str,
    pub done: bool,
    /// Whether this task's points are currently included in the total.
    counted: bool,
}

impl Task {
    #[must_use]
    pub const fn new(title: &'static str, due: &'static str) -> Self {
        Self {
            title,
            due,
            done: false,
            counted: false,
        }
    }
}

/// Something the counter should announce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointsEvent {
    Gained(i64),
    Lost(i64),
    Milestone(i64),
}

impl PointsEvent {
    /// Notification text, e.g. `+10 pontos`.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Gained(points) => format!("+{points} pontos"),
            Self::Lost(points) => format!("-{points} pontos"),
            Self::Milestone(total) => format!(
                "Parabéns! Você alcançou {} pontos!",
                crate::util::format::group_thousands(total)
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    pub points: i64,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self {
            tasks: vec![
                Task::new("Revisar fluxo de aprovação de compras", "Hoje"),
                Task::new("Atualizar relatório semanal de vendas", "Amanhã"),
                Task::new("Configurar automação de onboarding", "Sexta"),
                Task::new("Validar integração com o ERP", "Próxima semana"),
            ],
            points: INITIAL_POINTS,
        }
    }
}

impl TaskBoard {
    /// Tick or untick task `index` and return the announcements.
    ///
    /// A task adds its points at most once while checked and gives them back
    /// when unchecked. Out-of-range indices and no-op changes return nothing.
    pub fn set_done(&mut self, index: usize, done: bool) -> Vec<PointsEvent> {
        let Some(task) = self.tasks.get_mut(index) else {
            return Vec::new();
        };
        task.done = done;
        if done && !task.counted {
            task.counted = true;
            let before = self.points;
            self.points += TASK_POINTS;
            let mut events = vec![PointsEvent::Gained(TASK_POINTS)];
            if before < POINTS_MILESTONE && self.points >= POINTS_MILESTONE {
                events.push(PointsEvent::Milestone(POINTS_MILESTONE));
            }
            events
        } else if !done && task.counted {
            task.counted = false;
            self.points -= TASK_POINTS;
            vec![PointsEvent::Lost(TASK_POINTS)]
        } else {
            Vec::new()
        }
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}
