//! Process memory probe backed by `sysinfo`.

use parking_lot::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};

use marquee_core::metrics::MemoryUsage;

/// Source of host memory figures merged into the status report.
pub trait MemoryProbe: Send + Sync {
    fn sample(&self) -> Option<MemoryUsage>;
}

/// Reads resident / virtual memory of the current process.
pub struct ProcessMemoryProbe {
    sys: Mutex<System>,
    pid: Option<Pid>,
}

impl ProcessMemoryProbe {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = %e, "current pid unavailable, memory figures disabled");
                None
            }
        };
        Self {
            sys: Mutex::new(System::new()),
            pid,
        }
    }
}

impl Default for ProcessMemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for ProcessMemoryProbe {
    fn sample(&self) -> Option<MemoryUsage> {
        let pid = self.pid?;
        let mut sys = self.sys.lock();
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        sys.process(pid).map(|p| MemoryUsage {
            resident_bytes: p.memory(),
            virtual_bytes: p.virtual_memory(),
        })
    }
}
