//! The talk itself: memory pressure inside Docker containers.

use crate::slide::Slide;

const SERVER_GC_SNIPPET: &str = r#"<PropertyGroup>
  <ServerGarbageCollection>true</ServerGarbageCollection>
</PropertyGroup>"#;

const WATCHDOG_SNIPPET: &str = r#"const string LimitFile =
    "/sys/fs/cgroup/memory/memory.limit_in_bytes";

static void MemoryWatchdog()
{
    var limit = long.Parse(File.ReadAllText(LimitFile));
    for (;;)
    {
        if (Process.GetCurrentProcess().WorkingSet64 > limit * 9 / 10)
        {
            GC.Collect();
        }
        Thread.Sleep(1000);
    }
}"#;

const FAILPOINT_SNIPPET: &str = r#"try
{
    using (new MemoryFailPoint(sizeInMegabytes: 64))
    {
        ProcessBatch();
    }
}
catch (InsufficientMemoryException)
{
    // shed load instead of dying
}"#;

/// The full deck, in running order.
pub fn talk() -> Vec<Slide> {
    vec![
        Slide::text(".NET is a garbage collected language."),
        Slide::text(
            "The garbage collector works by cleaning up unreferenced memory as required.",
        ),
        Slide::text("To do this, the garbage collector needs to know three things:"),
        Slide::text("    • How much memory is the application using"),
        Slide::text("    • How much memory does the application need"),
        Slide::text("    • How much memory is available"),
        Slide::text("\nThis produces a metric that dotnet calls \"memory pressure\""),
        Slide::text(
            "Normally, this metric works great. When running in Docker, however, 'memory' \
             isn't always what you expect. For example here is the result of the `free` \
             command when run in a VM with 1GB of memory.",
        ),
        Slide::command("docker", "run --rm alpine free"),
        Slide::text(
            "The total memory is listed at about 1GB, as expected. Docker can limit the \
             memory used by a container with the `--memory` argument. Now what would you \
             expect to happen when I call `free` with the limit set to 40mb?",
        ),
        Slide::command("docker", "run --rm --memory=40mb alpine free"),
        Slide::text(
            "Those are the same results as before. `free` is lying to us about how much \
             memory is actually available. When you set memory limits in Docker, it sets \
             them using *cgroups* which have to be queried differently than system memory. \
             Here is what cgroups reports for my process.",
        ),
        Slide::command("docker", "run --rm alpine cat /sys/fs/cgroup/memory/memory.limit_in_bytes"),
        Slide::text(
            "Wow, that's a lot of ram! That's basically 2^63, which makes sense for a \
             64-bit machine. Now the same thing, but with the `--memory` argument set.",
        ),
        Slide::command(
            "docker",
            "run --rm --memory=40mb alpine cat /sys/fs/cgroup/memory/memory.limit_in_bytes",
        ),
        Slide::text(
            "We finally have a reasonable number! What happens if we ask .NET the same \
             question?",
        ),
        Slide::command(
            "docker",
            "run --rm mcr.microsoft.com/powershell:ubuntu-18.04 pwsh -Command \
             [System.Diagnostics.Process]::GetCurrentProcess().MaxWorkingSet",
        ),
        Slide::text("Ok, looks the same so far. Now again with `--memory`."),
        Slide::command(
            "docker",
            "run --rm --memory=40mb mcr.microsoft.com/powershell:ubuntu-18.04 pwsh -Command \
             [System.Diagnostics.Process]::GetCurrentProcess().MaxWorkingSet",
        ),
        Slide::text(
            "That's not what I was hoping to see. The runtime reports the same limit \
             whether the container is constrained or not.",
        ),
        Slide::text(
            "Because of this blind spot, .NET often waits too long to collect, and the \
             container is killed by cgroups instead. The runtime is normally a good \
             citizen, it simply doesn't know where the line is. Watch what happens when a \
             container runs face first into its memory limit.",
        ),
        Slide::command("docker", "run --memory=40mb --name oom-demo alpine tail /dev/zero"),
        Slide::inspect(),
        Slide::text(
            "The kernel OOM killer got it. The container didn't exit, it was *killed* the \
             moment it crossed a line that .NET never saw coming.",
        ),
        Slide::command("docker", "rm oom-demo"),
        Slide::text("So what can we do about it?"),
        Slide::text(
            "*Option 1: the server garbage collector.* A different collector \
             implementation designed for long-running services. Some people claim that \
             enabling it fixes the issue in containers, but the results seem inconsistent. \
             The experiment is cheap to run, set the flag and deploy.",
        ),
        Slide::code(SERVER_GC_SNIPPET),
        Slide::text(
            "*Option 2: garbage haxin code.* I feel dirty for even suggesting it. A \
             background thread watches process memory against the limit cgroups published, \
             and calls GC.Collect when we drift too close. It would set off a million red \
             flags in review, but nothing else knows where the line is.",
        ),
        Slide::code(WATCHDOG_SNIPPET),
        Slide::text(
            "And guard the big allocations up front. MemoryFailPoint asks for headroom \
             before you commit, and hands you an exception you can actually catch instead \
             of a visit from the OOM killer.",
        ),
        Slide::code(FAILPOINT_SNIPPET),
        Slide::text("[END]"),
    ]
}
