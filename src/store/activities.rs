use super::{ACTIVITIES_KEY, RecordStore};
use crate::models::{ACTIVITY_CAP, Activity, JUST_NOW, seed};

impl RecordStore {
    /// Most recent first, at most [`ACTIVITY_CAP`] entries.
    pub fn list_activities(&self) -> Vec<Activity> {
        self.load(ACTIVITIES_KEY, seed::activities)
    }

    /// Prepend `activity`, evicting the oldest entries beyond the cap.
    pub fn append_activity(&mut self, activity: Activity) {
        let loaded = self.load_for_update(ACTIVITIES_KEY, seed::activities);
        let mut activities = loaded.value;
        activities.insert(0, activity);
        activities.truncate(ACTIVITY_CAP);
        self.save_loaded(ACTIVITIES_KEY, &activities, loaded.writable);
    }

    /// Append a fresh "Just now" activity with a generated id.
    pub fn record_activity(&mut self, kind: &str, text: impl Into<String>) -> Activity {
        let activity = Activity::new(self.ids.next().to_string(), kind, text, JUST_NOW);
        self.append_activity(activity.clone());
        activity
    }
}
