mod quizzes;
mod sandboxes;
mod tabs;
