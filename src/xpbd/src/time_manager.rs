use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeModel {
	// every frame advances by the same amount
	Fixed,
	// frames advance by the measured wall time
	Realtime,
}

pub struct TimeManager {
	pft: f32,
	max_dt: f32,
	model: TimeModel,
	last: Option<Instant>,
}

impl TimeManager {
	pub fn new(model: TimeModel, pft: f32) -> Self {
		Self {
			pft,
			max_dt: pft * 4.0,
			model,
			last: None,
		}
	}

	pub fn fixed(pft: f32) -> Self {
		Self::new(TimeModel::Fixed, pft)
	}

	pub fn realtime(pft: f32) -> Self {
		Self::new(TimeModel::Realtime, pft)
	}

	/// Upper bound for a measured frame, so a stall does not turn into
	/// one huge physics step.
	pub fn with_max_dt(mut self, max_dt: f32) -> Self {
		self.max_dt = max_dt;
		self
	}

	pub fn get_pft(&self) -> f32 {
		self.pft
	}

	pub fn take_time(&mut self) -> f32 {
		match self.model {
			TimeModel::Fixed => self.pft,
			TimeModel::Realtime => {
				let now = Instant::now();
				let dt = match self.last.replace(now) {
					None => self.pft,
					Some(last) => now.duration_since(last).as_secs_f32(),
				};
				dt.min(self.max_dt)
			}
		}
	}
}
