//! Open-shop scheduling as a GA problem.

use crate::error::{Error, Result};
use crate::ga::{Encoding, GaProblem, Genome};

/// Minimize the makespan of an open shop.
///
/// Every task must run once on every machine; a machine processes one task
/// at a time and a task occupies one machine at a time. Genomes are task
/// priority orders: tasks are released in genome order, and each task walks
/// the machines in index order, starting each operation as soon as both the
/// machine and the task are free.
#[derive(Debug, Clone)]
pub struct OpenShopProblem {
    // durations[task][machine]
    durations: Vec<Vec<u64>>,
}

impl OpenShopProblem {
    /// Creates a problem from a rectangular task × machine duration table.
    pub fn new(durations: Vec<Vec<u64>>) -> Result<Self> {
        if durations.is_empty() {
            return Err(Error::Config("open shop needs at least one task".into()));
        }
        let machines = durations[0].len();
        if machines == 0 {
            return Err(Error::Config("open shop needs at least one machine".into()));
        }
        for (task, row) in durations.iter().enumerate() {
            if row.len() != machines {
                return Err(Error::Config(format!(
                    "duration table must be rectangular: task {task} has {} machines, expected {machines}",
                    row.len()
                )));
            }
        }
        Ok(Self { durations })
    }

    /// Number of tasks.
    pub fn num_tasks(&self) -> usize {
        self.durations.len()
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.durations[0].len()
    }

    /// Completion time of every operation under a task order, indexed
    /// `[task][machine]`.
    pub fn completion_times(&self, order: &[usize]) -> Vec<Vec<u64>> {
        let machines = self.num_machines();
        let mut machine_free = vec![0u64; machines];
        let mut completion = vec![vec![0u64; machines]; self.num_tasks()];

        for &task in order {
            let mut task_free = 0u64;
            for m in 0..machines {
                let start = machine_free[m].max(task_free);
                let end = start + self.durations[task][m];
                machine_free[m] = end;
                task_free = end;
                completion[task][m] = end;
            }
        }
        completion
    }

    /// Latest completion time under a task order.
    pub fn makespan(&self, order: &[usize]) -> u64 {
        self.completion_times(order)
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

impl GaProblem for OpenShopProblem {
    fn encoding(&self) -> Encoding {
        Encoding::Permutation {
            length: self.num_tasks(),
        }
    }

    fn cost(&self, genome: &Genome) -> f64 {
        match genome.as_permutation() {
            Some(order) => self.makespan(order) as f64,
            None => f64::INFINITY,
        }
    }
}
